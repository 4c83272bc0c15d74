//! Error types and handling infrastructure for ttxview.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types, with `anyhow` used at the binary edge for context.
//!
//! Page-load failure is deliberately not represented here: the page source
//! signals it in-band through the raw page's `load_error` flag, and the
//! application gate maps it to a single fixed message instead of an error
//! value.

use thiserror::Error;

/// The main error type for ttxview operations.
///
/// This enum covers all error conditions that can occur during page
/// retrieval, model conversion, and rendering.
#[derive(Error, Debug)]
pub enum TtxviewError {
    /// An item's kind tag matched neither text nor link during model
    /// conversion. The source format may carry kinds this model does not
    /// know yet; they must surface instead of defaulting to fabricated
    /// content.
    #[error("unrecognized item kind: {kind}")]
    UnrecognizedItemKind { kind: String },

    /// A raw page structure violated the source format's contract
    /// (wrong navigation slot count, undecodable document, ...)
    #[error("malformed page structure: {message}")]
    MalformedPage { message: String },

    /// Source-side I/O failure outside the ordinary page-unavailable signal
    #[error("page source failure: {message}")]
    SourceError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Output sink failure while rendering; fatal to the current render
    #[error("render output failed")]
    RenderError {
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for ttxview operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the ttxview codebase.
pub type Result<T> = std::result::Result<T, TtxviewError>;

impl TtxviewError {
    /// Create an UnrecognizedItemKind error for the given kind tag
    pub fn unrecognized_item_kind(kind: impl Into<String>) -> Self {
        Self::UnrecognizedItemKind { kind: kind.into() }
    }

    /// Create a MalformedPage error with a descriptive message
    pub fn malformed_page(message: impl Into<String>) -> Self {
        Self::MalformedPage {
            message: message.into(),
        }
    }

    /// Create a SourceError from an io::Error with additional context
    pub fn source_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceError {
            message: message.into(),
            source,
        }
    }
}

// Write failures reaching the renderer through `?` are sink errors
impl From<std::io::Error> for TtxviewError {
    fn from(err: std::io::Error) -> Self {
        Self::RenderError { source: err }
    }
}
