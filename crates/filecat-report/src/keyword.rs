//! Keyword search over directory names.

use compact_str::CompactString;
use derive_builder::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use filecat_core::{CatalogError, DirectoryEntry, DirectoryRecord, FileRecord, find_file};

/// Keyword used when none is configured.
pub const DEFAULT_KEYWORD: &str = "язык";

/// Configuration for the keyword search.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct KeywordConfig {
    /// Substring to look for in directory names, compared case-insensitively.
    #[builder(default = "CompactString::from(DEFAULT_KEYWORD)")]
    #[serde(default = "default_keyword")]
    pub keyword: CompactString,
}

fn default_keyword() -> CompactString {
    CompactString::from(DEFAULT_KEYWORD)
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            keyword: CompactString::from(DEFAULT_KEYWORD),
        }
    }
}

impl KeywordConfig {
    /// Create a new config builder.
    pub fn builder() -> KeywordConfigBuilder {
        KeywordConfigBuilder::default()
    }

    /// Create a config for a specific keyword.
    pub fn new(keyword: impl Into<CompactString>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

/// Directory name to the ordered names of its member files.
///
/// Insertion order follows directory input order.
pub type KeywordReport = IndexMap<CompactString, Vec<CompactString>>;

/// Find directories whose name contains the configured keyword, with their files.
///
/// The match is a case-insensitive substring test on the directory name.
/// Member files are resolved through the junction `entries`, in junction input
/// order. A selected directory with no junction entries maps to an empty
/// vector. Fails with [`CatalogError::FileNotFound`] when a junction
/// references a file id absent from `files`; nothing is silently skipped.
pub fn directories_matching_keyword(
    directories: &[DirectoryRecord],
    entries: &[DirectoryEntry],
    files: &[FileRecord],
    config: &KeywordConfig,
) -> Result<KeywordReport, CatalogError> {
    let needle = config.keyword.to_lowercase();
    let mut report = KeywordReport::new();

    for directory in directories
        .iter()
        .filter(|d| d.name.to_lowercase().contains(needle.as_str()))
    {
        let mut names = Vec::new();
        for entry in entries.iter().filter(|e| e.directory == directory.id) {
            names.push(find_file(files, entry.file)?.name.clone());
        }
        report.insert(directory.name.clone(), names);
    }

    tracing::debug!(
        keyword = %config.keyword,
        directories = report.len(),
        "matched directories by keyword"
    );
    Ok(report)
}
