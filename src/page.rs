//! Typed page content model.
//!
//! Converts the wire structures from [`crate::source`] into an owned,
//! closed model: every item is exactly text or link, navigation slots are
//! fixed-size arrays sized by named constants, and all string data is owned
//! by the page so the source storage can be dropped as soon as conversion
//! returns. A page is built once per invocation, consumed by the renderer,
//! and never mutated afterwards.

use crate::error::{Result, TtxviewError};
use crate::source::{RawItem, RawPage, RawRow};

/// Number of top navigation slots in the source format
/// (previous page, previous sub-page, next sub-page, next page).
pub const TOP_NAVIGATION_SIZE: usize = 4;

/// Number of bottom navigation link slots in the source format.
pub const BOTTOM_NAVIGATION_SIZE: usize = 6;

/// Kind tag of a wire text item.
const KIND_TEXT: &str = "text";

/// Kind tag of a wire link item.
const KIND_LINK: &str = "link";

/// Plain text content within a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub text: String,
}

/// A hyperlink within a row.
///
/// `url` is retained for future use and is not rendered; `inner_text` is
/// the displayed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub url: String,
    pub inner_text: String,
}

/// A single content unit within a row: exactly text or link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Text(TextItem),
    Link(LinkItem),
}

/// Discriminant-only companion of [`Item`], used by the renderer's
/// link-adjacency tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Text,
    Link,
}

impl Item {
    /// Build a typed item from a wire item, dispatching on its kind tag.
    ///
    /// A tag that is neither text nor link fails with
    /// [`TtxviewError::UnrecognizedItemKind`]; there is no silent default.
    pub fn from_raw(raw: RawItem) -> Result<Item> {
        let RawItem {
            kind,
            text,
            url,
            inner_text,
        } = raw;

        match kind.as_str() {
            KIND_TEXT => Ok(Item::Text(TextItem { text })),
            KIND_LINK => Ok(Item::Link(LinkItem { url, inner_text })),
            other => Err(TtxviewError::unrecognized_item_kind(other)),
        }
    }

    /// The kind discriminant of this item.
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Text(_) => ItemKind::Text,
            Item::Link(_) => ItemKind::Link,
        }
    }

    /// The text this item contributes to a rendered line.
    pub fn display_text(&self) -> &str {
        match self {
            Item::Text(text) => &text.text,
            Item::Link(link) => &link.inner_text,
        }
    }
}

/// An ordered line of items rendered together on one output line.
///
/// Insertion order defines the left-to-right render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub items: Vec<Item>,
}

impl Row {
    /// Convert each wire slot into a typed item, in order.
    pub fn from_raw(raw: RawRow) -> Result<Row> {
        let items = raw
            .items
            .into_iter()
            .map(Item::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Ok(Row { items })
    }
}

/// The full structured content of one teletext-style page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: TextItem,
    /// Modeled but not rendered; part of the source format contract.
    pub top_navigation: [Item; TOP_NAVIGATION_SIZE],
    /// Modeled but not rendered.
    pub bottom_navigation: [LinkItem; BOTTOM_NAVIGATION_SIZE],
    /// Sub-page index row, rendered as one line without separators.
    pub sub_pages: Row,
    /// Page body; each row renders as one terminal line.
    pub middle: Vec<Row>,
    /// Set when the source could not retrieve or parse the page. When true,
    /// no other field is meaningful and rendering must not be attempted.
    pub load_error: bool,
}

impl Page {
    /// Convert a wire page into the owned model.
    ///
    /// Pure transformation: validates the fixed navigation slot counts
    /// against the named constants and returns a page that shares no
    /// storage with the source. A wire page carrying the load-failure
    /// signal converts to [`Page::unavailable`] without inspecting its
    /// other fields, since the source guarantees nothing about them.
    pub fn from_raw(raw: RawPage) -> Result<Page> {
        if raw.load_error {
            return Ok(Page::unavailable());
        }

        let top_navigation = raw
            .top_navigation
            .into_iter()
            .map(Item::from_raw)
            .collect::<Result<Vec<_>>>()?;
        let top_navigation: [Item; TOP_NAVIGATION_SIZE] =
            top_navigation.try_into().map_err(|slots: Vec<Item>| {
                TtxviewError::malformed_page(format!(
                    "top navigation has {} slots, expected {TOP_NAVIGATION_SIZE}",
                    slots.len()
                ))
            })?;

        let bottom_navigation = raw
            .bottom_navigation
            .into_iter()
            .map(|link| LinkItem {
                url: link.url,
                inner_text: link.inner_text,
            })
            .collect::<Vec<_>>();
        let bottom_navigation: [LinkItem; BOTTOM_NAVIGATION_SIZE] =
            bottom_navigation.try_into().map_err(|slots: Vec<LinkItem>| {
                TtxviewError::malformed_page(format!(
                    "bottom navigation has {} slots, expected {BOTTOM_NAVIGATION_SIZE}",
                    slots.len()
                ))
            })?;

        let sub_pages = Row::from_raw(raw.sub_pages)?;
        let middle = raw
            .middle
            .into_iter()
            .map(Row::from_raw)
            .collect::<Result<Vec<_>>>()?;

        Ok(Page {
            title: TextItem { text: raw.title },
            top_navigation,
            bottom_navigation,
            sub_pages,
            middle,
            load_error: false,
        })
    }

    /// The unavailable-page sentinel: empty content with `load_error` set.
    pub fn unavailable() -> Page {
        Page {
            title: TextItem {
                text: String::new(),
            },
            top_navigation: std::array::from_fn(|_| {
                Item::Text(TextItem {
                    text: String::new(),
                })
            }),
            bottom_navigation: std::array::from_fn(|_| LinkItem {
                url: String::new(),
                inner_text: String::new(),
            }),
            sub_pages: Row::default(),
            middle: Vec::new(),
            load_error: true,
        }
    }
}
