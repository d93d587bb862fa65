//! Record filtering for minimal reports.

use crate::record::NameEntry;

/// Name IDs retained in minimal mode.
pub const MINIMAL_NAME_IDS: [u16; 12] = [1, 2, 3, 4, 5, 6, 16, 17, 18, 21, 22, 25];

/// Whether a record is kept in the report.
///
/// Without `minimal` every record is admitted; with it, only the
/// curated IDs in [`MINIMAL_NAME_IDS`].
pub fn admits(entry: &NameEntry, minimal: bool) -> bool {
    !minimal || MINIMAL_NAME_IDS.contains(&entry.name_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name_id: u16) -> NameEntry {
        NameEntry::new(name_id, 3, 1, 0x409, "value")
    }

    #[test]
    fn test_admits_everything_without_minimal() {
        for name_id in 0..300 {
            assert!(admits(&entry(name_id), false));
        }
    }

    #[test]
    fn test_minimal_admits_only_allow_list() {
        for name_id in 0..300 {
            let expected = MINIMAL_NAME_IDS.contains(&name_id);
            assert_eq!(admits(&entry(name_id), true), expected, "nameID {name_id}");
        }
    }

    #[test]
    fn test_minimal_rejects_copyright() {
        assert!(admits(&entry(0), false));
        assert!(!admits(&entry(0), true));
    }
}
