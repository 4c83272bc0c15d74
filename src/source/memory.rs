//! In-memory page source.
//!
//! Serves raw pages from a map keyed by page address. Used by the test
//! suites to drive the full fetch/convert/render path without touching the
//! filesystem; also usable by embedders that assemble pages themselves.

use crate::error::Result;
use crate::source::{PageSource, RawPage};
use async_trait::async_trait;
use std::collections::HashMap;

/// Page source serving a fixed set of in-memory raw pages.
#[derive(Debug, Default)]
pub struct StaticSource {
    pages: HashMap<(u16, u8), RawPage>,
}

impl StaticSource {
    /// Create an empty source; every fetch yields the load-failure signal.
    pub fn new() -> StaticSource {
        StaticSource::default()
    }

    /// Add a page at the given address, builder style.
    pub fn with_page(mut self, page: u16, sub_page: u8, raw: RawPage) -> StaticSource {
        self.pages.insert((page, sub_page), raw);
        self
    }
}

#[async_trait]
impl PageSource for StaticSource {
    async fn fetch_page(&self, page: u16, sub_page: u8) -> Result<RawPage> {
        Ok(self
            .pages
            .get(&(page, sub_page))
            .cloned()
            .unwrap_or_else(RawPage::unavailable))
    }
}
