//! Report block formatting for one font's name table.

use crate::{
    error::{Error, Result},
    filter::admits,
    record::NameEntry,
    wrap::wrap,
};

/// Default report width in columns.
pub const DEFAULT_WIDTH: usize = 90;

const LABEL_INDENT: usize = 2;
const VALUE_INDENT: usize = 4;
const VALUE_CONTINUATION_INDENT: usize = 6;

/// Report layout and filtering options, validated at construction.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    width: usize,
    minimal: bool,
    max_lines: Option<usize>,
}

impl ReportOptions {
    /// Build options, rejecting a zero width or line cap.
    pub fn new(width: usize, minimal: bool, max_lines: Option<usize>) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidArgument("report width must be at least 1".into()));
        }
        if max_lines == Some(0) {
            return Err(Error::InvalidArgument("max lines must be at least 1".into()));
        }
        Ok(Self { width, minimal, max_lines })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn minimal(&self) -> bool {
        self.minimal
    }

    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, minimal: false, max_lines: None }
    }
}

/// One font's identifier and its extracted name entries.
#[derive(Debug, Clone)]
pub struct FontNames {
    pub source: String,
    pub entries: Vec<NameEntry>,
}

/// Render one font's name entries into a report block.
///
/// Entries are filtered, then sorted by ascending name, platform,
/// encoding, and language ID so that the same table always renders
/// byte-identically regardless of its original record order.
pub fn format_names(font: &FontNames, options: &ReportOptions) -> Result<String> {
    let mut entries: Vec<&NameEntry> =
        font.entries.iter().filter(|entry| admits(entry, options.minimal())).collect();
    entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()).then_with(|| a.value.cmp(&b.value)));

    let mut block = String::new();
    block.push_str(&format!("Font file: {}\n", font.source));

    for entry in entries {
        block.push_str(&format!(
            "{:indent$}nameID {} ({}), platformID {}, encID {}, langID {}\n",
            "",
            entry.name_id,
            entry.description(),
            entry.platform_id,
            entry.encoding_id,
            entry.language_id,
            indent = LABEL_INDENT,
        ));

        let wrapped = wrap(
            &entry.value,
            options.width(),
            VALUE_INDENT,
            VALUE_CONTINUATION_INDENT,
            options.max_lines(),
        )?;
        if !wrapped.is_empty() {
            block.push_str(&wrapped);
            block.push('\n');
        }
    }

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_font() -> FontNames {
        FontNames {
            source: "Test-Regular.ttf".to_string(),
            entries: vec![
                NameEntry::new(2, 3, 1, 0x409, "Regular"),
                NameEntry::new(0, 3, 1, 0x409, "Copyright 2024 Example Foundry"),
                NameEntry::new(1, 3, 1, 0x409, "Test Family"),
                NameEntry::new(1, 1, 0, 0, "Test Family"),
            ],
        }
    }

    #[test]
    fn test_header_identifies_font() {
        let block = format_names(&sample_font(), &ReportOptions::default()).unwrap();
        assert!(block.starts_with("Font file: Test-Regular.ttf\n"));
    }

    #[test]
    fn test_copyright_present_without_minimal() {
        let block = format_names(&sample_font(), &ReportOptions::default()).unwrap();
        assert!(block.contains("nameID 0 (Copyright Notice)"));
        assert!(block.contains("Copyright 2024 Example Foundry"));
    }

    #[test]
    fn test_copyright_omitted_with_minimal() {
        let options = ReportOptions::new(DEFAULT_WIDTH, true, None).unwrap();
        let block = format_names(&sample_font(), &options).unwrap();
        assert!(!block.contains("nameID 0"));
        assert!(!block.contains("Copyright 2024 Example Foundry"));
        assert!(block.contains("nameID 1 (Family Name)"));
    }

    #[test]
    fn test_deterministic_order() {
        let block = format_names(&sample_font(), &ReportOptions::default()).unwrap();
        let id0 = block.find("nameID 0").unwrap();
        let id1_mac = block.find("nameID 1 (Family Name), platformID 1").unwrap();
        let id1_win = block.find("nameID 1 (Family Name), platformID 3").unwrap();
        let id2 = block.find("nameID 2").unwrap();
        assert!(id0 < id1_mac && id1_mac < id1_win && id1_win < id2);
    }

    #[test]
    fn test_order_independent_of_input() {
        let font = sample_font();
        let mut reversed = font.clone();
        reversed.entries.reverse();
        let options = ReportOptions::default();
        assert_eq!(
            format_names(&font, &options).unwrap(),
            format_names(&reversed, &options).unwrap()
        );
    }

    #[test]
    fn test_long_value_wrapped_and_capped() {
        let font = FontNames {
            source: "Long.ttf".to_string(),
            entries: vec![NameEntry::new(0, 3, 1, 0x409, "word ".repeat(60))],
        };
        let options = ReportOptions::new(40, false, Some(2)).unwrap();
        let block = format_names(&font, &options).unwrap();
        // header + label + 2 capped value lines
        assert_eq!(block.lines().count(), 4);
        assert!(block.trim_end().ends_with("[...]"));
        for line in block.lines().skip(2) {
            assert!(line.chars().count() <= 40);
        }
    }

    #[test]
    fn test_empty_value_renders_label_only() {
        let font = FontNames {
            source: "Empty.ttf".to_string(),
            entries: vec![NameEntry::new(1, 3, 1, 0x409, "")],
        };
        let block = format_names(&font, &ReportOptions::default()).unwrap();
        assert_eq!(block.lines().count(), 2);
    }

    #[test]
    fn test_options_reject_zero_width() {
        assert!(ReportOptions::new(0, false, None).is_err());
    }

    #[test]
    fn test_options_reject_zero_max_lines() {
        assert!(ReportOptions::new(80, false, Some(0)).is_err());
    }
}
