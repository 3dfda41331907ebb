#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/goldcross/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Feature derivation and return curves for the goldcross pipeline.

/// The version of the goldcross-features crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod builder;
pub mod equity;
pub mod rolling;
pub mod rsi;

// Re-export main types
pub use builder::{FeatureBuild, FeatureBuilder, FeatureConfig};
pub use equity::{EquityCurve, ReturnBasis, equity_curve};
pub use rsi::{RsiConfig, rsi};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
