//! Name table record model.

/// One entry of a font's name table.
///
/// The same `name_id` may repeat across platform/encoding/language
/// combinations. Entries are immutable once extracted from a font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub name_id: u16,
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub value: String,
}

impl NameEntry {
    pub fn new(
        name_id: u16,
        platform_id: u16,
        encoding_id: u16,
        language_id: u16,
        value: impl Into<String>,
    ) -> Self {
        Self { name_id, platform_id, encoding_id, language_id, value: value.into() }
    }

    /// Sort key giving the deterministic report order.
    pub fn sort_key(&self) -> (u16, u16, u16, u16) {
        (self.name_id, self.platform_id, self.encoding_id, self.language_id)
    }

    /// Human-readable description of this entry's name ID.
    pub fn description(&self) -> &'static str {
        name_id_description(self.name_id)
    }
}

/// Description of a registered OpenType name ID.
pub fn name_id_description(name_id: u16) -> &'static str {
    match name_id {
        0 => "Copyright Notice",
        1 => "Family Name",
        2 => "Subfamily Name",
        3 => "Unique Identifier",
        4 => "Full Font Name",
        5 => "Version String",
        6 => "PostScript Name",
        7 => "Trademark",
        8 => "Manufacturer Name",
        9 => "Designer",
        10 => "Description",
        11 => "Vendor URL",
        12 => "Designer URL",
        13 => "License Description",
        14 => "License Info URL",
        15 => "Reserved",
        16 => "Typographic Family",
        17 => "Typographic Subfamily",
        18 => "Compatible Full Name",
        19 => "Sample Text",
        20 => "PostScript CID Findfont Name",
        21 => "WWS Family Name",
        22 => "WWS Subfamily Name",
        23 => "Light Background Palette",
        24 => "Dark Background Palette",
        25 => "Variations PostScript Name Prefix",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_order() {
        let a = NameEntry::new(1, 3, 1, 0x409, "Family");
        let b = NameEntry::new(1, 3, 1, 0x411, "Family JP");
        let c = NameEntry::new(2, 1, 0, 0, "Regular");
        assert!(a.sort_key() < b.sort_key());
        assert!(b.sort_key() < c.sort_key());
    }

    #[test]
    fn test_name_id_description() {
        assert_eq!(name_id_description(0), "Copyright Notice");
        assert_eq!(name_id_description(1), "Family Name");
        assert_eq!(name_id_description(17), "Typographic Subfamily");
        assert_eq!(name_id_description(300), "Unknown");
    }
}
