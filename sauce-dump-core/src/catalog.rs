//! SAUCE data-type and file-type name tables.
//!
//! The data type selects a broad category; the file type is only meaningful
//! relative to it. Only Character, Bitmap, Vector, Audio and Archive carry a
//! file-type table. BinaryText and XBin reuse the file-type byte for the
//! character width, and None/Executable leave it unused.
//!
//! All tables are `const` data: nothing here allocates or mutates.

/// Broad content category stored in the DataType byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    None,
    Character,
    Bitmap,
    Vector,
    Audio,
    BinaryText,
    XBin,
    Archive,
    Executable,
}

/// All data types in code order.
const ALL_DATA_TYPES: &[DataType] = &[
    DataType::None,
    DataType::Character,
    DataType::Bitmap,
    DataType::Vector,
    DataType::Audio,
    DataType::BinaryText,
    DataType::XBin,
    DataType::Archive,
    DataType::Executable,
];

/// File-type codes under [`DataType::Character`].
pub mod character {
    pub const ASCII: u8 = 0;
    pub const ANSI: u8 = 1;
    pub const ANSIMATION: u8 = 2;
    pub const RIP_SCRIPT: u8 = 3;
    pub const PCBOARD: u8 = 4;
    pub const AVATAR: u8 = 5;
    pub const HTML: u8 = 6;
    pub const SOURCE: u8 = 7;
    pub const TUNDRA_DRAW: u8 = 8;
}

// Each table is indexed by file-type code.

const CHARACTER_FILE_TYPES: &[&str] = &[
    "ASCII",
    "ANSi",
    "ANSiMation",
    "RIP script",
    "PCBoard",
    "Avatar",
    "HTML",
    "Source",
    "TundraDraw",
];

const BITMAP_FILE_TYPES: &[&str] = &[
    "GIF", "PCX", "LBM/IFF", "TGA", "FLI", "FLC", "BMP", "GL", "DL", "WPG", "PNG", "JPG", "MPG",
    "AVI",
];

const VECTOR_FILE_TYPES: &[&str] = &["DXF", "DWG", "WPG", "3DS"];

const AUDIO_FILE_TYPES: &[&str] = &[
    "MOD", "669", "STM", "S3M", "MTM", "FAR", "ULT", "AMF", "DMF", "OKT", "ROL", "CMF", "MID",
    "SADT", "VOC", "WAV", "SMP8", "SMP8S", "SMP16", "SMP16S", "PATCH8", "PATCH16", "XM", "HSC",
    "IT",
];

const ARCHIVE_FILE_TYPES: &[&str] = &[
    "ZIP", "ARJ", "LZH", "ARC", "TAR", "ZOO", "RAR", "UC2", "PAK", "SQZ",
];

impl DataType {
    /// Map a raw DataType byte to a known data type.
    pub fn from_code(code: u8) -> Option<Self> {
        ALL_DATA_TYPES.get(usize::from(code)).copied()
    }

    /// The DataType byte for this variant.
    pub fn code(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Character => 1,
            Self::Bitmap => 2,
            Self::Vector => 3,
            Self::Audio => 4,
            Self::BinaryText => 5,
            Self::XBin => 6,
            Self::Archive => 7,
            Self::Executable => 8,
        }
    }

    /// Display name as used in SAUCE documentation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Character => "Character",
            Self::Bitmap => "Bitmap",
            Self::Vector => "Vector",
            Self::Audio => "Audio",
            Self::BinaryText => "BinaryText",
            Self::XBin => "XBin",
            Self::Archive => "Archive",
            Self::Executable => "Executable",
        }
    }

    /// File-type names for this data type, indexed by file-type code.
    pub fn file_types(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Character => Some(CHARACTER_FILE_TYPES),
            Self::Bitmap => Some(BITMAP_FILE_TYPES),
            Self::Vector => Some(VECTOR_FILE_TYPES),
            Self::Audio => Some(AUDIO_FILE_TYPES),
            Self::Archive => Some(ARCHIVE_FILE_TYPES),
            Self::None | Self::BinaryText | Self::XBin | Self::Executable => None,
        }
    }

    /// All 9 data types in code order.
    pub fn all() -> &'static [DataType] {
        ALL_DATA_TYPES
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Look up the name of a DataType byte. `None` if the code is unknown.
pub fn data_type_name(code: u8) -> Option<&'static str> {
    DataType::from_code(code).map(|dt| dt.name())
}

/// Whether a file-type table is registered for this DataType byte.
pub fn has_file_type_table(data_type: u8) -> bool {
    DataType::from_code(data_type)
        .and_then(|dt| dt.file_types())
        .is_some()
}

/// Look up the name of a FileType byte under the given DataType byte.
///
/// `None` if the data type has no file-type table or the file-type code is
/// not in it.
pub fn file_type_name(data_type: u8, file_type: u8) -> Option<&'static str> {
    DataType::from_code(data_type)?
        .file_types()?
        .get(usize::from(file_type))
        .copied()
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
