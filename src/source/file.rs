//! Directory-backed page source.
//!
//! Reads pre-structured page documents (`<root>/<page>_<sub_page>.json`)
//! produced by the upstream fetch/parse pipeline. A missing, unreadable, or
//! undecodable document is the ordinary page-unavailable case and surfaces
//! through the load-failure signal, not as a hard error.

use crate::error::{Result, TtxviewError};
use crate::source::{PageSource, RawPage};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Page source reading JSON page documents from a directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Create a source rooted at the given pages directory.
    pub fn new(root: impl Into<PathBuf>) -> FileSource {
        FileSource { root: root.into() }
    }

    /// Path of the document holding the given page address.
    fn document_path(&self, page: u16, sub_page: u8) -> PathBuf {
        self.root.join(format!("{page}_{sub_page}.json"))
    }

    fn read_document(&self, path: &Path) -> Result<RawPage> {
        validate_document_path(path)?;

        let contents = fs::read_to_string(path).map_err(|e| {
            TtxviewError::source_error(
                format!("failed to read page document: {}", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            TtxviewError::malformed_page(format!(
                "failed to decode page document {}: {e}",
                path.display()
            ))
        })
    }
}

#[async_trait]
impl PageSource for FileSource {
    async fn fetch_page(&self, page: u16, sub_page: u8) -> Result<RawPage> {
        let path = self.document_path(page, sub_page);
        match self.read_document(&path) {
            Ok(raw) => Ok(raw),
            Err(err) => {
                log::warn!("page {page}/{sub_page} unavailable: {err}");
                Ok(RawPage::unavailable())
            }
        }
    }
}

/// Validate that a page document path points at a readable regular file
fn validate_document_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TtxviewError::source_error(
            format!("page document does not exist: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "document not found"),
        ));
    }

    let metadata = fs::metadata(path)
        .map_err(|e| TtxviewError::source_error("failed to read document metadata", e))?;

    if !metadata.is_file() {
        return Err(TtxviewError::source_error(
            format!("page document path is not a file: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    /// Create a pages directory holding one document for the given address
    fn create_pages_dir(page: u16, sub_page: u8, contents: &str) -> TempDir {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(format!("{page}_{sub_page}.json"));
        let mut file = std::fs::File::create(path).expect("create page document");
        file.write_all(contents.as_bytes())
            .expect("write page document");
        dir
    }

    #[tokio::test]
    async fn test_fetch_decodes_existing_document() {
        let dir = create_pages_dir(
            100,
            1,
            r#"{
                "title": "NEWS",
                "sub_pages": {"items": [{"kind": "text", "text": "1 2 3"}]},
                "middle": [{"items": [{"kind": "text", "text": "headline"}]}]
            }"#,
        );

        let source = FileSource::new(dir.path());
        let raw = source.fetch_page(100, 1).await.unwrap();

        assert!(!raw.load_error);
        assert_eq!(raw.title, "NEWS");
        assert_eq!(raw.middle.len(), 1);
        assert_eq!(raw.sub_pages.items[0].text, "1 2 3");
    }

    #[tokio::test]
    async fn test_missing_document_yields_load_failure_signal() {
        let dir = TempDir::new().expect("create temp dir");
        let source = FileSource::new(dir.path());

        let raw = source.fetch_page(100, 1).await.unwrap();
        assert!(raw.load_error);
    }

    #[tokio::test]
    async fn test_undecodable_document_yields_load_failure_signal() {
        let dir = create_pages_dir(100, 1, "this is not json");
        let source = FileSource::new(dir.path());

        let raw = source.fetch_page(100, 1).await.unwrap();
        assert!(raw.load_error);
    }

    #[tokio::test]
    async fn test_addresses_map_to_distinct_documents() {
        let dir = create_pages_dir(201, 2, r#"{"title": "SPORTS 2/4"}"#);
        let source = FileSource::new(dir.path());

        let hit = source.fetch_page(201, 2).await.unwrap();
        assert_eq!(hit.title, "SPORTS 2/4");

        let miss = source.fetch_page(201, 1).await.unwrap();
        assert!(miss.load_error);
    }

    #[test]
    fn test_validate_rejects_directory() {
        let dir = TempDir::new().expect("create temp dir");
        let result = validate_document_path(dir.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            TtxviewError::SourceError { message, .. } => {
                assert!(message.contains("not a file"));
            }
            _ => panic!("expected SourceError for directory path"),
        }
    }
}
