//! Directory ranking by total file volume.

use std::collections::HashMap;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use filecat_core::{CatalogError, DirectoryId, DirectoryRecord, FileRecord};

/// One row of the volume ranking: a directory and the summed volume of its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryVolume {
    /// Directory name.
    pub directory_name: CompactString,

    /// Sum of `volume` over all files owned by this directory.
    pub total_volume: u64,
}

/// Rank directories by total file volume, descending.
///
/// Every directory gets a row, zero-initialized, even when it owns no files.
/// Ties keep directory input order (the sort is stable). Fails with
/// [`CatalogError::DirectoryNotFound`] when a file references a directory id
/// absent from `directories`.
pub fn rank_directories_by_volume(
    files: &[FileRecord],
    directories: &[DirectoryRecord],
) -> Result<Vec<DirectoryVolume>, CatalogError> {
    let mut totals: HashMap<DirectoryId, u64> =
        directories.iter().map(|d| (d.id, 0)).collect();

    for file in files {
        match totals.get_mut(&file.directory) {
            Some(total) => *total += file.volume,
            None => {
                return Err(CatalogError::DirectoryNotFound {
                    id: file.directory,
                });
            }
        }
    }

    let mut rows: Vec<DirectoryVolume> = directories
        .iter()
        .map(|d| DirectoryVolume {
            directory_name: d.name.clone(),
            total_volume: totals[&d.id],
        })
        .collect();
    rows.sort_by(|a, b| b.total_volume.cmp(&a.total_volume));

    tracing::debug!(rows = rows.len(), "ranked directories by volume");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filecat_core::FileId;

    #[test]
    fn test_empty_inputs() {
        let rows = rank_directories_by_volume(&[], &[]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_directory_without_files_ranks_at_zero() {
        let directories = vec![
            DirectoryRecord::new(DirectoryId::new(1), "full"),
            DirectoryRecord::new(DirectoryId::new(2), "empty"),
        ];
        let files = vec![FileRecord::new(FileId::new(1), "f", 30, DirectoryId::new(1))];

        let rows = rank_directories_by_volume(&files, &directories).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_volume, 30);
        assert_eq!(rows[1].directory_name.as_str(), "empty");
        assert_eq!(rows[1].total_volume, 0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let directories = vec![
            DirectoryRecord::new(DirectoryId::new(1), "second-by-name"),
            DirectoryRecord::new(DirectoryId::new(2), "first-by-name"),
        ];
        let files = vec![
            FileRecord::new(FileId::new(1), "a", 10, DirectoryId::new(1)),
            FileRecord::new(FileId::new(2), "b", 10, DirectoryId::new(2)),
        ];

        let rows = rank_directories_by_volume(&files, &directories).unwrap();
        assert_eq!(rows[0].directory_name.as_str(), "second-by-name");
        assert_eq!(rows[1].directory_name.as_str(), "first-by-name");
    }

    #[test]
    fn test_dangling_directory_reference_fails() {
        let directories = vec![DirectoryRecord::new(DirectoryId::new(1), "docs")];
        let files = vec![FileRecord::new(FileId::new(1), "f", 5, DirectoryId::new(9))];

        let err = rank_directories_by_volume(&files, &directories).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DirectoryNotFound {
                id: DirectoryId::new(9)
            }
        );
    }
}
