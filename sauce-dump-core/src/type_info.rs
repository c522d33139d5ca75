//! Type-dependent interpretation of the four TInfo fields.
//!
//! Only a few (data type, file type) pairs give TInfo1/TInfo2 a dimension
//! meaning that is worth deriving. Everything else is reported as raw values.

use serde::Serialize;

use crate::catalog::{DataType, character};

/// Unit of a derived size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Characters,
    Pixels,
}

impl SizeUnit {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Pixels => "pixels",
        }
    }
}

/// Which file types a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTypes {
    Any,
    Only(&'static [u8]),
}

impl FileTypes {
    fn contains(&self, file_type: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Only(codes) => codes.contains(&file_type),
        }
    }
}

/// One row of the size dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRule {
    pub data_type: DataType,
    pub file_types: FileTypes,
    pub unit: SizeUnit,
    /// Width substituted when TInfo1 is 0 (unset).
    pub default_width: Option<u16>,
}

/// Conventional terminal width assumed when a text file leaves it unset.
pub const DEFAULT_CHARACTER_WIDTH: u16 = 80;

/// Character file types whose TInfo1/TInfo2 are a character grid.
const CHARACTER_GRID_TYPES: &[u8] = &[
    character::ASCII,
    character::ANSI,
    character::ANSIMATION,
    character::PCBOARD,
    character::AVATAR,
    character::TUNDRA_DRAW,
];

const SIZE_RULES: &[SizeRule] = &[
    SizeRule {
        data_type: DataType::Character,
        file_types: FileTypes::Only(CHARACTER_GRID_TYPES),
        unit: SizeUnit::Characters,
        default_width: Some(DEFAULT_CHARACTER_WIDTH),
    },
    // RIP is pixel addressed even though it is filed under Character.
    SizeRule {
        data_type: DataType::Character,
        file_types: FileTypes::Only(&[character::RIP_SCRIPT]),
        unit: SizeUnit::Pixels,
        default_width: None,
    },
    SizeRule {
        data_type: DataType::Bitmap,
        file_types: FileTypes::Any,
        unit: SizeUnit::Pixels,
        default_width: None,
    },
];

/// Find the size rule for a DataType/FileType byte pair, if any.
pub fn size_interpretation(data_type: u8, file_type: u8) -> Option<&'static SizeRule> {
    let dt = DataType::from_code(data_type)?;
    SIZE_RULES
        .iter()
        .find(|rule| rule.data_type == dt && rule.file_types.contains(file_type))
}

/// Width and height derived from TInfo1/TInfo2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
    pub unit: SizeUnit,
}

impl SizeRule {
    pub fn apply(&self, type_info: [u16; 4]) -> Dimensions {
        let width = match (type_info[0], self.default_width) {
            (0, Some(default)) => default,
            (w, _) => w,
        };
        Dimensions {
            width,
            height: type_info[1],
            unit: self.unit,
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} {}", self.width, self.height, self.unit.name())
    }
}

/// Derive dimensions for a DataType/FileType pair, or `None` when TInfo has
/// no size meaning for it.
pub fn dimensions(data_type: u8, file_type: u8, type_info: [u16; 4]) -> Option<Dimensions> {
    size_interpretation(data_type, file_type).map(|rule| rule.apply(type_info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_grid_types_use_characters() {
        // ASCII, ANSi, ANSiMation, PCBoard, Avatar, TundraDraw
        for ft in [0u8, 1, 2, 4, 5, 8] {
            let rule = size_interpretation(1, ft)
                .unwrap_or_else(|| panic!("file type {} has no size rule", ft));
            assert_eq!(rule.unit, SizeUnit::Characters, "file type {}", ft);
            assert_eq!(rule.default_width, Some(80), "file type {}", ft);
            let dims = rule.apply([132, 43, 0, 0]);
            assert_eq!(dims.to_string(), "132 x 43 characters");
        }
    }

    #[test]
    fn character_grid_set_is_exact() {
        let grid: Vec<u8> = (0..=u8::MAX)
            .filter(|&ft| {
                size_interpretation(1, ft).is_some_and(|r| r.unit == SizeUnit::Characters)
            })
            .collect();
        assert_eq!(grid, [0, 1, 2, 4, 5, 8]);
    }

    #[test]
    fn rip_script_uses_pixels() {
        let rule = size_interpretation(1, character::RIP_SCRIPT).unwrap();
        assert_eq!(rule.unit, SizeUnit::Pixels);
        assert_eq!(rule.default_width, None);
    }

    #[test]
    fn html_and_source_have_no_size() {
        assert!(size_interpretation(1, character::HTML).is_none());
        assert!(size_interpretation(1, character::SOURCE).is_none());
        assert!(size_interpretation(1, 9).is_none());
    }

    #[test]
    fn bitmap_any_file_type_uses_pixels() {
        for ft in [0u8, 10, 13, 200] {
            assert_eq!(size_interpretation(2, ft).unwrap().unit, SizeUnit::Pixels);
        }
    }

    #[test]
    fn other_data_types_have_no_size() {
        for dt in [0u8, 3, 4, 5, 6, 7, 8, 200] {
            assert!(size_interpretation(dt, 0).is_none(), "data type {}", dt);
        }
    }

    #[test]
    fn zero_width_defaults_to_80_for_text() {
        let dims = dimensions(1, character::ASCII, [0, 25, 0, 0]).unwrap();
        assert_eq!(dims.width, 80);
        assert_eq!(dims.height, 25);
        assert_eq!(dims.to_string(), "80 x 25 characters");
    }

    #[test]
    fn zero_width_kept_for_pixels() {
        let dims = dimensions(2, 0, [0, 480, 0, 0]).unwrap();
        assert_eq!(dims.to_string(), "0 x 480 pixels");
    }

    #[test]
    fn dimensions_display() {
        let dims = dimensions(1, character::RIP_SCRIPT, [320, 200, 7, 9]).unwrap();
        assert_eq!(dims.to_string(), "320 x 200 pixels");
        let dims = dimensions(1, character::ANSI, [160, 50, 0, 0]).unwrap();
        assert_eq!(dims.to_string(), "160 x 50 characters");
    }
}
