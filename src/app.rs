//! Application orchestration layer.
//!
//! Wires a page source to the model conversion and the renderer, and owns
//! the single load gate: either the page is renderable and the title and
//! body are emitted once each, in that order, or the fixed failure line is
//! printed and nothing else.

use crate::error::Result;
use crate::page::Page;
use crate::render;
use crate::source::PageSource;
use std::io::Write;

/// The one user-visible line printed when a page could not be loaded.
const LOAD_FAILURE_MESSAGE: &str = "Failed load the page";

/// Application orchestrator - fetches one page and renders it to a sink.
pub struct Application {
    source: Box<dyn PageSource>,
}

impl Application {
    /// Create the application around an injected page source.
    pub fn new(source: Box<dyn PageSource>) -> Application {
        Application { source }
    }

    /// Fetch, convert, and render one page to `out`.
    ///
    /// On the load-failure signal the sole output is the fixed failure
    /// line. Otherwise the title renders first, then the body, exactly once
    /// each.
    pub async fn show_page<W: Write>(&self, out: &mut W, page: u16, sub_page: u8) -> Result<()> {
        log::debug!("fetching page {page}/{sub_page}");
        let raw = self.source.fetch_page(page, sub_page).await?;
        let page = Page::from_raw(raw)?;

        if page.load_error {
            writeln!(out, "{LOAD_FAILURE_MESSAGE}")?;
            return Ok(());
        }

        render::render_title(out, &page)?;
        render::render_body(out, &page)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RawPage, StaticSource};

    async fn show(source: StaticSource, page: u16, sub_page: u8) -> String {
        let app = Application::new(Box::new(source));
        let mut out = Vec::new();
        app.show_page(&mut out, page, sub_page)
            .await
            .expect("show page");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[tokio::test]
    async fn test_load_error_prints_only_the_failure_line() {
        let source = StaticSource::new().with_page(100, 1, RawPage::unavailable());
        let output = show(source, 100, 1).await;
        assert_eq!(output, "Failed load the page\n");
    }

    #[tokio::test]
    async fn test_unknown_page_prints_only_the_failure_line() {
        let output = show(StaticSource::new(), 578, 1).await;
        assert_eq!(output, "Failed load the page\n");
    }
}
