//! File selection guard.
//!
//! Decides whether the files chosen in the picker may be uploaded. The only
//! check is a substring match on the first file name; content is never
//! inspected.

use crate::size_format::format_size;

/// A file picked by the user.
///
/// `H` is the platform handle used to read the content later
/// (`web_sys::File` in the browser).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    /// File name as reported by the picker
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Handle for reading the content
    pub handle: H,
}

impl<H> SelectedFile<H> {
    pub fn new(name: impl Into<String>, size: u64, handle: H) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }
}

/// Result of checking a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionVerdict {
    /// Upload allowed; carries the size label for all selected files
    Accepted { size_label: String },
    /// Wrong file type, or nothing selected
    Rejected,
}

/// Sum of the sizes of all selected files.
pub fn total_size<H>(files: &[SelectedFile<H>]) -> u64 {
    files.iter().map(|file| file.size).sum()
}

/// Check a selection against the required file name marker.
pub fn evaluate<H>(files: &[SelectedFile<H>], marker: &str) -> SelectionVerdict {
    match files.first() {
        Some(first) if first.name.contains(marker) => SelectionVerdict::Accepted {
            size_label: format_size(total_size(files)),
        },
        _ => SelectionVerdict::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> SelectedFile<()> {
        SelectedFile::new(name, size, ())
    }

    #[test]
    fn test_img_file_accepted() {
        let verdict = evaluate(&[file("app_v2.img", 2048)], ".img");
        assert_eq!(
            verdict,
            SelectionVerdict::Accepted {
                size_label: "2.000 KiB (2048 bytes)".to_string()
            }
        );
    }

    #[test]
    fn test_marker_anywhere_in_name() {
        let verdict = evaluate(&[file("fw.img.bak", 10)], ".img");
        assert!(matches!(verdict, SelectionVerdict::Accepted { .. }));
    }

    #[test]
    fn test_other_extension_rejected() {
        assert_eq!(
            evaluate(&[file("app.bin", 10)], ".img"),
            SelectionVerdict::Rejected
        );
    }

    #[test]
    fn test_empty_selection_rejected() {
        assert_eq!(evaluate::<()>(&[], ".img"), SelectionVerdict::Rejected);
    }

    #[test]
    fn test_only_first_name_checked_but_all_sizes_counted() {
        let files = [file("a.img", 600), file("b.txt", 600)];
        assert_eq!(total_size(&files), 1200);
        assert_eq!(
            evaluate(&files, ".img"),
            SelectionVerdict::Accepted {
                size_label: "1.172 KiB (1200 bytes)".to_string()
            }
        );

        let files = [file("b.txt", 600), file("a.img", 600)];
        assert_eq!(evaluate(&files, ".img"), SelectionVerdict::Rejected);
    }
}
