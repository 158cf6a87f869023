//! Entity records: files, directories, and their junction table.

use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Unique identifier for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub u64);

impl FileId {
    /// Create a new FileId from a u64.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectoryId(pub u64);

impl DirectoryId {
    /// Create a new DirectoryId from a u64.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for DirectoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single file in the catalog.
///
/// Carries a denormalized pointer to its owning directory alongside the
/// junction table modeled by [`DirectoryEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique identifier for this file.
    pub id: FileId,

    /// File name.
    pub name: CompactString,

    /// Size of the file, in an arbitrary unit of volume.
    pub volume: u64,

    /// Owning directory.
    pub directory: DirectoryId,
}

impl FileRecord {
    /// Create a new file record.
    pub fn new(
        id: FileId,
        name: impl Into<CompactString>,
        volume: u64,
        directory: DirectoryId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            volume,
            directory,
        }
    }
}

/// A directory in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    /// Unique identifier for this directory.
    pub id: DirectoryId,

    /// Directory name, used for sorting and keyword matching.
    pub name: CompactString,
}

impl DirectoryRecord {
    /// Create a new directory record.
    pub fn new(id: DirectoryId, name: impl Into<CompactString>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Junction record associating a file with a directory (many-to-many).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// The file side of the association.
    pub file: FileId,

    /// The directory side of the association.
    pub directory: DirectoryId,
}

impl DirectoryEntry {
    /// Create a new junction record.
    pub fn new(file: FileId, directory: DirectoryId) -> Self {
        Self { file, directory }
    }
}

/// Look up a directory by id, first match wins.
pub fn find_directory(
    directories: &[DirectoryRecord],
    id: DirectoryId,
) -> Result<&DirectoryRecord, CatalogError> {
    directories
        .iter()
        .find(|d| d.id == id)
        .ok_or(CatalogError::DirectoryNotFound { id })
}

/// Look up a file by id, first match wins.
pub fn find_file(files: &[FileRecord], id: FileId) -> Result<&FileRecord, CatalogError> {
    files
        .iter()
        .find(|f| f.id == id)
        .ok_or(CatalogError::FileNotFound { id })
}
