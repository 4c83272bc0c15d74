//! Page retrieval abstraction and wire structures.
//!
//! A page source resolves a page address `(page, sub_page)` to a raw page
//! structure. Sources live behind the [`PageSource`] trait so the model and
//! renderer can be exercised against fixture data without touching real
//! retrieval. Two implementations ship with the crate: [`FileSource`] reads
//! JSON page documents from a directory, and [`StaticSource`] serves
//! in-memory fixtures.

use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

pub mod file;
pub mod memory;

pub use file::FileSource;
pub use memory::StaticSource;

/// A single wire item: a kind tag plus payload slots.
///
/// The tag and the payload slots are independent at this level; the typed
/// model closes the pairing off during conversion. Unknown kind tags decode
/// successfully here so they can surface as a conversion error rather than
/// an opaque deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub inner_text: String,
}

/// A wire link. Bottom navigation slots are links directly, with no kind tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLink {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub inner_text: String,
}

/// One wire row of items.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub items: Vec<RawItem>,
}

/// The wire form of a full page as produced by the upstream fetch/parse
/// pipeline.
///
/// Slot counts are carried by the arrays themselves; the typed model
/// enforces the fixed-slot contract of the navigation arrays during
/// conversion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub top_navigation: Vec<RawItem>,
    #[serde(default)]
    pub bottom_navigation: Vec<RawLink>,
    #[serde(default)]
    pub sub_pages: RawRow,
    #[serde(default)]
    pub middle: Vec<RawRow>,
    #[serde(default)]
    pub load_error: bool,
}

impl RawPage {
    /// The load-failure signal: an empty page with `load_error` set.
    pub fn unavailable() -> RawPage {
        RawPage {
            load_error: true,
            ..RawPage::default()
        }
    }
}

/// Core trait for page retrieval.
///
/// The async boundary is the one place this crate may suspend; retrieval
/// is opaque to the model and renderer. All implementations must be
/// thread-safe.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Resolve a page address to its raw page structure.
    ///
    /// Ordinary retrieval failure (page missing, content undecodable) is
    /// reported in-band via [`RawPage::unavailable`]; `Err` is reserved for
    /// exceptional source failures and aborts the invocation.
    async fn fetch_page(&self, page: u16, sub_page: u8) -> Result<RawPage>;
}
