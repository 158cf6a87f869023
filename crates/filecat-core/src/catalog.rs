//! Catalog container bundling the three entity collections.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::record::{
    DirectoryEntry, DirectoryId, DirectoryRecord, FileId, FileRecord, find_directory, find_file,
};

/// Owned bundle of files, directories, and junction records.
///
/// Purely a convenience for callers that build the collections once and run
/// several queries over them. The query functions themselves take explicit
/// slices, so the catalog holds no hidden state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// All file records.
    pub files: Vec<FileRecord>,

    /// All directory records.
    pub directories: Vec<DirectoryRecord>,

    /// Junction records associating files with directories.
    pub entries: Vec<DirectoryEntry>,
}

impl Catalog {
    /// Create a catalog from the three collections.
    pub fn new(
        files: Vec<FileRecord>,
        directories: Vec<DirectoryRecord>,
        entries: Vec<DirectoryEntry>,
    ) -> Self {
        Self {
            files,
            directories,
            entries,
        }
    }

    /// Number of files in the catalog.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of directories in the catalog.
    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    /// Sum of all file volumes.
    pub fn total_volume(&self) -> u64 {
        self.files.iter().map(|f| f.volume).sum()
    }

    /// Check if the catalog holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty() && self.entries.is_empty()
    }

    /// Look up a file by id.
    pub fn file_by_id(&self, id: FileId) -> Result<&FileRecord, CatalogError> {
        find_file(&self.files, id)
    }

    /// Look up a directory by id.
    pub fn directory_by_id(&self, id: DirectoryId) -> Result<&DirectoryRecord, CatalogError> {
        find_directory(&self.directories, id)
    }
}
