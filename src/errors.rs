//! Configuration errors reported eagerly at construction time.
//!
//! Geometric degeneracies (zero-length vectors, coincident points) are never
//! errors; placement absorbs them with documented fallbacks. Everything in
//! here is a host configuration mistake that must surface before any
//! placement runs.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while setting up dimensions, labels, or standards.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("unknown dimension standard: {name:?}")]
    #[diagnostic(
        code(dimline::config::unknown_standard),
        help("valid standards are \"ISO\" and \"ASME\"")
    )]
    UnknownStandard { name: String },

    #[error("invalid label extents: {source}")]
    #[diagnostic(
        code(dimline::config::invalid_extents),
        help("label half extents must be finite and strictly positive")
    )]
    InvalidExtents {
        #[source]
        source: NumericError,
    },

    #[error("invalid placement constant {name}: {source}")]
    #[diagnostic(
        code(dimline::config::invalid_constant),
        help("placement constants must be finite and non-negative")
    )]
    InvalidConstant {
        name: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("invalid arc radius: {source}")]
    #[diagnostic(
        code(dimline::config::invalid_radius),
        help("the measured radius must be finite and strictly positive")
    )]
    InvalidRadius {
        #[source]
        source: NumericError,
    },

    #[error("invalid measured point: {source}")]
    #[diagnostic(code(dimline::config::invalid_point))]
    InvalidPoint {
        #[source]
        source: NumericError,
    },
}
