//! Reporting queries for filecat.
//!
//! This crate provides three pure queries over catalog collections:
//!
//! - **File listing** - files grouped under their directories, directories
//!   in ascending name order
//! - **Volume ranking** - directories ordered by total file volume, descending
//! - **Keyword search** - directories whose name contains a keyword, with
//!   their member files resolved through the junction table
//!
//! All queries borrow their inputs immutably and allocate only their
//! outputs; identical inputs produce identical results.
//!
//! # File listing
//!
//! ```rust,ignore
//! use filecat_report::list_files_by_directory;
//!
//! let rows = list_files_by_directory(&catalog.files, &catalog.directories);
//! for row in &rows {
//!     println!("{} ({}) in {}", row.file_name, row.volume, row.directory_name);
//! }
//! ```
//!
//! # Keyword search
//!
//! ```rust,ignore
//! use filecat_report::{KeywordConfig, directories_matching_keyword};
//!
//! let config = KeywordConfig::builder().keyword("язык").build().unwrap();
//! let report = directories_matching_keyword(
//!     &catalog.directories,
//!     &catalog.entries,
//!     &catalog.files,
//!     &config,
//! )?;
//!
//! for (directory, files) in &report {
//!     println!("{directory}: {} files", files.len());
//! }
//! ```

mod keyword;
mod listing;
mod volume;

pub use keyword::{
    DEFAULT_KEYWORD, KeywordConfig, KeywordConfigBuilder, KeywordReport,
    directories_matching_keyword,
};
pub use listing::{FileRow, list_files_by_directory};
pub use volume::{DirectoryVolume, rank_directories_by_volume};

// Re-export core types
pub use filecat_core::{
    Catalog, CatalogError, DirectoryEntry, DirectoryId, DirectoryRecord, FileId, FileRecord,
};
