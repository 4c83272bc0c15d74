//! Terminal rendering of a page.
//!
//! Pure formatting over any `io::Write` sink. Middle rows apply the
//! link-adjacency rule: two links with no intervening text get a single `-`
//! between them so their labels do not fuse visually. The last rendered
//! kind is carried across row boundaries, so a link ending one line still
//! separates a link opening the next; this matches the observed behavior of
//! the upstream renderer and is preserved deliberately. The sub-page index
//! row concatenates its items with no separators at all.
//!
//! The renderer assumes a well-formed [`Page`]; its only failure mode is a
//! sink write error, which aborts the current render.

use crate::error::Result;
use crate::page::{Item, ItemKind, Page, Row};
use std::io::Write;

/// Indent prefix of every rendered content line.
const INDENT: &str = "  ";

/// Separator emitted between two adjacent links in a middle row.
const LINK_SEPARATOR: &str = "-";

/// Write the page title framed by a leading blank line.
pub fn render_title<W: Write>(out: &mut W, page: &Page) -> Result<()> {
    write!(out, "\n{INDENT}{}\n", page.title.text)?;
    Ok(())
}

/// Write the page body: every middle row on its own line, followed by the
/// sub-page index row and two trailing newlines.
pub fn render_body<W: Write>(out: &mut W, page: &Page) -> Result<()> {
    // Not reset between rows; the flag survives the line break.
    let mut last = ItemKind::Text;

    for row in &page.middle {
        write!(out, "{INDENT}")?;
        render_row(out, row, &mut last)?;
        writeln!(out)?;
    }

    write!(out, "{INDENT}")?;
    for item in &page.sub_pages.items {
        write!(out, "{}", item.display_text())?;
    }
    write!(out, "\n\n")?;

    Ok(())
}

/// Render one row's items in order, threading the carried last-kind flag.
fn render_row<W: Write>(out: &mut W, row: &Row, last: &mut ItemKind) -> Result<()> {
    for item in &row.items {
        match item {
            Item::Text(text) => {
                write!(out, "{}", text.text)?;
                *last = ItemKind::Text;
            }
            Item::Link(link) => {
                if *last == ItemKind::Link {
                    write!(out, "{LINK_SEPARATOR}")?;
                }
                write!(out, "{}", link.inner_text)?;
                *last = ItemKind::Link;
            }
        }
    }
    Ok(())
}
