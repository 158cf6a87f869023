//! File listing grouped by directory.

use compact_str::CompactString;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use filecat_core::{DirectoryRecord, FileRecord};

/// One row of the file listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRow {
    /// File name.
    pub file_name: CompactString,

    /// File volume.
    pub volume: u64,

    /// Name of the directory the file belongs to.
    pub directory_name: CompactString,
}

/// List all files with their volumes, grouped under directories sorted by name.
///
/// Directories are visited in ascending lexicographic order of `name`; within
/// each directory, files keep their input order. Directories with no files
/// contribute no rows. Empty inputs yield an empty listing.
pub fn list_files_by_directory(
    files: &[FileRecord],
    directories: &[DirectoryRecord],
) -> Vec<FileRow> {
    let mut rows = Vec::new();

    for directory in directories.iter().sorted_by(|a, b| a.name.cmp(&b.name)) {
        for file in files.iter().filter(|f| f.directory == directory.id) {
            rows.push(FileRow {
                file_name: file.name.clone(),
                volume: file.volume,
                directory_name: directory.name.clone(),
            });
        }
    }

    tracing::debug!(rows = rows.len(), "built file listing");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use filecat_core::{DirectoryId, FileId};

    #[test]
    fn test_empty_inputs() {
        assert!(list_files_by_directory(&[], &[]).is_empty());
    }

    #[test]
    fn test_directories_sorted_by_name() {
        let directories = vec![
            DirectoryRecord::new(DirectoryId::new(1), "zeta"),
            DirectoryRecord::new(DirectoryId::new(2), "alpha"),
        ];
        let files = vec![
            FileRecord::new(FileId::new(1), "one", 5, DirectoryId::new(1)),
            FileRecord::new(FileId::new(2), "two", 7, DirectoryId::new(2)),
        ];

        let rows = list_files_by_directory(&files, &directories);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].directory_name.as_str(), "alpha");
        assert_eq!(rows[1].directory_name.as_str(), "zeta");
    }

    #[test]
    fn test_files_keep_input_order_within_directory() {
        let directories = vec![DirectoryRecord::new(DirectoryId::new(1), "docs")];
        let files = vec![
            FileRecord::new(FileId::new(3), "third", 1, DirectoryId::new(1)),
            FileRecord::new(FileId::new(1), "first", 2, DirectoryId::new(1)),
        ];

        let rows = list_files_by_directory(&files, &directories);
        assert_eq!(rows[0].file_name.as_str(), "third");
        assert_eq!(rows[1].file_name.as_str(), "first");
    }

    #[test]
    fn test_empty_directory_contributes_no_rows() {
        let directories = vec![
            DirectoryRecord::new(DirectoryId::new(1), "empty"),
            DirectoryRecord::new(DirectoryId::new(2), "full"),
        ];
        let files = vec![FileRecord::new(FileId::new(1), "f", 9, DirectoryId::new(2))];

        let rows = list_files_by_directory(&files, &directories);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].directory_name.as_str(), "full");
    }
}
