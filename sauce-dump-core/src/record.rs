//! SAUCE trailer decoder.
//!
//! The trailer is the last 128 bytes of the host file. Field offsets follow
//! the public SAUCE00 layout:
//!
//! ```text
//! 0   ID "SAUCE"      5      90  FileSize u32   4      104 Comments  1
//! 5   Version         2      94  DataType       1      105 TFlags    1
//! 7   Title          35      95  FileType       1      106 TInfoS   22
//! 42  Author         20      96  TInfo1..4 u16  8
//! 62  Group          20
//! 82  Date YYYYMMDD   8
//! ```
//!
//! All integers are little-endian.

use std::fs::File;
use std::io::{ErrorKind, SeekFrom};
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::catalog::{self, DataType};
use crate::error::{DateFieldError, DecodeError};
use crate::type_info::{self, Dimensions};
use crate::util::{parse_decimal, read_latin1_trimmed, read_u16_le, read_u32_le};
use crate::ReadSeek;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const TRAILER_SIZE: usize = 128;
/// A trailer plus at least one byte of body.
pub const MIN_FILE_SIZE: u64 = TRAILER_SIZE as u64 + 1;

pub const SAUCE_ID: [u8; 5] = *b"SAUCE";
pub const SAUCE_VERSION: [u8; 2] = *b"00";

const ID: usize = 0;
const VERSION: usize = 5;
const TITLE: usize = 7;
const TITLE_LEN: usize = 35;
const AUTHOR: usize = 42;
const AUTHOR_LEN: usize = 20;
const GROUP: usize = 62;
const GROUP_LEN: usize = 20;
const DATE: usize = 82;
const DATE_LEN: usize = 8;
const FILE_SIZE: usize = 90;
const DATA_TYPE: usize = 94;
const FILE_TYPE: usize = 95;
const TINFO: usize = 96;
const COMMENTS: usize = 104;
const TFLAGS: usize = 105;
const TINFOS: usize = 106;
const TINFOS_LEN: usize = 22;

// ---------------------------------------------------------------------------
// Date
// ---------------------------------------------------------------------------

/// Calendar date from the `YYYYMMDD` field.
///
/// Components are stored as parsed, without calendar validation; use
/// [`SauceDate::to_naive_date`] for a checked date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SauceDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl SauceDate {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse the 8-byte date field, substituting 0 for any year, month or
    /// day group that is not plain decimal digits.
    ///
    /// Legacy writers leave the field blank or space-padded often enough
    /// that rejecting the whole record over it would hide usable metadata.
    /// Use [`SauceDate::parse_strict`] to detect the substitution.
    pub fn parse_lenient(raw: &[u8; DATE_LEN]) -> Self {
        Self {
            year: parse_decimal(&raw[0..4]).unwrap_or(0) as u16,
            month: parse_decimal(&raw[4..6]).unwrap_or(0) as u8,
            day: parse_decimal(&raw[6..8]).unwrap_or(0) as u8,
        }
    }

    /// Parse the 8-byte date field, failing on the first malformed group.
    pub fn parse_strict(raw: &[u8; DATE_LEN]) -> Result<Self, DateFieldError> {
        let group = |range: std::ops::Range<usize>, part: &'static str| {
            parse_decimal(&raw[range]).ok_or_else(|| DateFieldError::NotDecimal {
                part,
                raw: String::from_utf8_lossy(raw).into_owned(),
            })
        };
        Ok(Self {
            year: group(0..4, "year")? as u16,
            month: group(4..6, "month")? as u8,
            day: group(6..8, "day")? as u8,
        })
    }

    /// The date as a `chrono::NaiveDate`, if the components form a real
    /// calendar date.
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl std::fmt::Display for SauceDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A decoded SAUCE trailer.
///
/// Only produced when the signature matches. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SauceRecord {
    #[serde(serialize_with = "serialize_ascii")]
    id: [u8; 5],
    #[serde(serialize_with = "serialize_ascii")]
    version: [u8; 2],
    title: String,
    author: String,
    group: String,
    date: SauceDate,
    #[serde(skip)]
    raw_date: [u8; DATE_LEN],
    file_size: u32,
    data_type: u8,
    file_type: u8,
    type_info: [u16; 4],
    comment_count: u8,
    flags: u8,
    #[serde(serialize_with = "serialize_nul_padded")]
    type_info_reserved: [u8; TINFOS_LEN],
}

fn serialize_ascii<S: Serializer, const N: usize>(
    bytes: &[u8; N],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

/// TInfoS holds a NUL-padded string (the font name for character files).
fn serialize_nul_padded<S: Serializer, const N: usize>(
    bytes: &[u8; N],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    serializer.serialize_str(&String::from_utf8_lossy(&bytes[..end]))
}

impl SauceRecord {
    pub fn id(&self) -> &[u8; 5] {
        &self.id
    }

    pub fn version(&self) -> [u8; 2] {
        self.version
    }

    /// Whether the version bytes are `"00"`, the only published version.
    pub fn is_supported_version(&self) -> bool {
        self.version == SAUCE_VERSION
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn date(&self) -> SauceDate {
        self.date
    }

    /// The date field exactly as stored.
    pub fn raw_date(&self) -> &[u8; DATE_LEN] {
        &self.raw_date
    }

    /// Whether every date group parsed without falling back to 0.
    pub fn date_is_well_formed(&self) -> bool {
        SauceDate::parse_strict(&self.raw_date).is_ok()
    }

    /// Declared size of the file body, excluding the trailer and comments.
    pub fn file_size(&self) -> u32 {
        self.file_size
    }

    pub fn data_type(&self) -> u8 {
        self.data_type
    }

    pub fn file_type(&self) -> u8 {
        self.file_type
    }

    pub fn type_info(&self) -> [u16; 4] {
        self.type_info
    }

    /// Number of comment lines stored before the trailer.
    pub fn comment_count(&self) -> u8 {
        self.comment_count
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn type_info_reserved(&self) -> &[u8; TINFOS_LEN] {
        &self.type_info_reserved
    }

    pub fn known_data_type(&self) -> Option<DataType> {
        DataType::from_code(self.data_type)
    }

    pub fn data_type_name(&self) -> Option<&'static str> {
        catalog::data_type_name(self.data_type)
    }

    pub fn file_type_name(&self) -> Option<&'static str> {
        catalog::file_type_name(self.data_type, self.file_type)
    }

    /// Size derived from TInfo1/TInfo2 for data/file types where that has
    /// a defined meaning.
    pub fn dimensions(&self) -> Option<Dimensions> {
        type_info::dimensions(self.data_type, self.file_type, self.type_info)
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Extract a record from a 128-byte trailer buffer.
///
/// Returns `None` when the buffer does not start with the `SAUCE` signature.
pub fn parse_trailer(buf: &[u8; TRAILER_SIZE]) -> Option<SauceRecord> {
    if buf[ID..ID + 5] != SAUCE_ID {
        return None;
    }

    let mut raw_date = [0u8; DATE_LEN];
    raw_date.copy_from_slice(&buf[DATE..DATE + DATE_LEN]);

    let mut type_info_reserved = [0u8; TINFOS_LEN];
    type_info_reserved.copy_from_slice(&buf[TINFOS..TINFOS + TINFOS_LEN]);

    Some(SauceRecord {
        id: SAUCE_ID,
        version: [buf[VERSION], buf[VERSION + 1]],
        title: read_latin1_trimmed(&buf[TITLE..TITLE + TITLE_LEN]),
        author: read_latin1_trimmed(&buf[AUTHOR..AUTHOR + AUTHOR_LEN]),
        group: read_latin1_trimmed(&buf[GROUP..GROUP + GROUP_LEN]),
        date: SauceDate::parse_lenient(&raw_date),
        raw_date,
        file_size: read_u32_le(buf, FILE_SIZE),
        data_type: buf[DATA_TYPE],
        file_type: buf[FILE_TYPE],
        type_info: [
            read_u16_le(buf, TINFO),
            read_u16_le(buf, TINFO + 2),
            read_u16_le(buf, TINFO + 4),
            read_u16_le(buf, TINFO + 6),
        ],
        comment_count: buf[COMMENTS],
        flags: buf[TFLAGS],
        type_info_reserved,
    })
}

/// Read until `buf` is full or the reader reports end of data.
fn read_up_to(reader: &mut dyn ReadSeek, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Decode the SAUCE trailer at the end of `reader`.
///
/// Returns `Ok(None)` when the file has no trailer. The reader position is
/// left at the end of the data on success.
pub fn decode(reader: &mut dyn ReadSeek) -> Result<Option<SauceRecord>, DecodeError> {
    let size = reader.seek(SeekFrom::End(0))?;
    if size < MIN_FILE_SIZE {
        return Err(DecodeError::TooShort {
            expected: MIN_FILE_SIZE,
            actual: size,
        });
    }

    let offset = size - TRAILER_SIZE as u64;
    reader.seek(SeekFrom::Start(offset))?;

    let mut buf = [0u8; TRAILER_SIZE];
    let read = read_up_to(reader, &mut buf)?;
    if read != TRAILER_SIZE {
        return Err(DecodeError::ShortRead {
            expected: TRAILER_SIZE,
            actual: read,
        });
    }

    let record = parse_trailer(&buf);
    log::trace!(
        "trailer at offset {offset}: {}",
        if record.is_some() { "SAUCE" } else { "no signature" }
    );
    Ok(record)
}

/// Open `path` read-only and decode its SAUCE trailer.
pub fn decode_path(path: impl AsRef<Path>) -> Result<Option<SauceRecord>, DecodeError> {
    let path = path.as_ref();
    log::debug!("reading SAUCE trailer from {}", path.display());
    let mut file = File::open(path).map_err(|e| DecodeError::open(path, e))?;
    decode(&mut file)
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
