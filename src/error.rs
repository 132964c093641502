//! Error taxonomy shared by every façade operation.
//!
//! The OS reports failure through sentinel return values (zero handles, zero
//! counts, FALSE), never through exceptions; these variants are the crate-side
//! names for those sentinels. No operation retries and none is fatal to the
//! process.

use thiserror::Error;

/// Errors that can occur during input, layout or clipboard operations
#[derive(Error, Debug)]
pub enum InputError {
    /// The named OS entry point returned its documented failure sentinel.
    #[error("OS call failed: {0}")]
    OsCallFailed(&'static str),

    /// A raw value fell outside a closed enum at the façade boundary.
    #[error("unsupported {what} value: {value}")]
    UnsupportedValue { what: &'static str, value: u32 },

    /// The clipboard could not be opened; nothing was mutated.
    #[error("clipboard unavailable (open failed)")]
    ClipboardUnavailable,

    /// The clipboard was opened but a later step failed; it has been closed.
    #[error("clipboard {stage} failed after open")]
    ClipboardWriteFailed { stage: &'static str },
}

pub type InputResult<T> = Result<T, InputError>;
