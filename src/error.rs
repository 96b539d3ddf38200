//! Error types for the DV core
//!
//! Profile resolution is the only fallible codec operation; everything else
//! is total over its input domain. The bit cursor reports buffer misuse and
//! the configuration layer reports out-of-range knobs.

use thiserror::Error;

/// Main error type for the DV core
#[derive(Debug, Error)]
pub enum DvError {
    /// Profile resolution failures
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Bit cursor failures
    #[error("Bitstream error: {0}")]
    Bitstream(#[from] BitstreamError),

    /// Configuration validation failures
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Profile resolution errors
///
/// Fatal for the current frame only; callers skip or reject the frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// No registered profile matches the frame header
    #[error("Unrecognized DV format: {reason}")]
    UnrecognizedFormat { reason: String },

    /// No registered profile matches the declared codec parameters
    #[error("Unsupported parameters: {width}x{height} {pix_fmt}")]
    UnsupportedParameters {
        width: u32,
        height: u32,
        pix_fmt: String,
    },
}

/// Bit cursor errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitstreamError {
    /// Writer ran out of room in the caller's buffer
    #[error("Bitstream overflow: attempted to write {requested} bits, only {available} available")]
    Overflow { requested: usize, available: usize },

    /// Reader ran past the end of the caller's buffer
    #[error("Bitstream exhausted: attempted to read {requested} bits, only {available} available")]
    Exhausted { requested: usize, available: usize },

    /// No variable-length code matches at this bit position
    #[error("Invalid variable-length code at bit {position}")]
    InvalidCode { position: usize },

    /// A block carried more than 63 AC coefficients
    #[error("Block holds more than 64 coefficients")]
    TooManyCoefficients,

    /// Bit count outside the cursor's 1..=32 window
    #[error("Invalid bit count: {0}")]
    InvalidBitCount(u32),
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Starting qlevel outside the qlevel table
    #[error("Starting qlevel {0} is outside the qlevel table")]
    StartingQlevelOutOfRange(usize),

    /// Minimum qlevel outside the qlevel table
    #[error("Minimum qlevel {0} is outside the qlevel table")]
    MinQlevelOutOfRange(usize),

    /// Bias pushes the search start outside the qlevel table
    #[error("Bias {name}={value} pushes the search start outside the qlevel table")]
    BiasOutOfRange { name: &'static str, value: usize },
}

/// Specialized result types for different modules
pub type ProfileResult<T> = std::result::Result<T, ProfileError>;
pub type BitstreamResult<T> = std::result::Result<T, BitstreamError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, DvError>;
