//! SAUCE metadata decoder.
//!
//! Locates the 128-byte SAUCE trailer at the end of a file, decodes its
//! fixed fields, names the data/file type from static tables and renders a
//! readable report.
//!
//! ```no_run
//! match sauce_dump_core::decode_path("art.ans")? {
//!     Some(record) => print!("{}", sauce_dump_core::render(&record)),
//!     None => println!("no SAUCE record"),
//! }
//! # Ok::<(), sauce_dump_core::DecodeError>(())
//! ```

use std::io::{Read, Seek};

pub mod catalog;
pub mod error;
pub mod record;
pub mod render;
pub mod type_info;
pub mod util;

pub use catalog::{DataType, data_type_name, file_type_name, has_file_type_table};
pub use error::{DateFieldError, DecodeError};
pub use record::{SauceDate, SauceRecord, decode, decode_path, parse_trailer};
pub use render::{ReportLine, ReportLines, render};
pub use type_info::{Dimensions, SizeUnit, size_interpretation};

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod fixtures;
