//! # ttxview - Teletext-Style Page Viewer
//!
//! Renders a teletext-style information page (title, body rows, sub-page
//! index) to the terminal. Page content arrives pre-structured from a
//! pluggable source; one invocation fetches one page, converts it into the
//! typed model, renders it, and exits.
//!
//! ## Features
//!
//! - **Closed item model**: every content unit is exactly text or link,
//!   matched exhaustively at every consumption site
//! - **Link-adjacency rule**: consecutive links are kept readable with a
//!   single `-` separator between them
//! - **Pluggable sources**: page retrieval sits behind a trait, so the
//!   model and renderer test against fixture data
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`source`] - Page retrieval abstraction and wire structures
//! - [`page`] - Typed page content model
//! - [`render`] - Terminal formatting of a page
//! - [`app`] - Application core and load gate

// Core modules
pub mod error;
pub mod page;
pub mod render;
pub mod source;

// Application core
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, TtxviewError};

// Public API surface for external usage
pub use app::Application;
pub use page::{Item, ItemKind, LinkItem, Page, Row, TextItem};
pub use source::{FileSource, PageSource, RawPage, StaticSource};

/// Page shown when no page number is selected on the command line.
pub const DEFAULT_PAGE: u16 = 100;

/// Index of the first sub-page; this viewer always shows the first.
pub const DEFAULT_SUB_PAGE: u8 = 1;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
