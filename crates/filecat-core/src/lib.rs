//! Core types for filecat.
//!
//! This crate provides the fundamental data structures used throughout
//! the filecat ecosystem: entity records, typed identifiers, the catalog
//! container, and lookup errors.

mod catalog;
mod error;
mod record;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use record::{
    DirectoryEntry, DirectoryId, DirectoryRecord, FileId, FileRecord, find_directory, find_file,
};
