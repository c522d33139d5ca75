//! Human-readable report for a decoded record.

use serde::Serialize;

use crate::catalog;
use crate::record::SauceRecord;

/// Label column width; labels are padded with dots up to this width.
const LABEL_WIDTH: usize = 8;

/// One labeled report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dots = LABEL_WIDTH.saturating_sub(self.label.len());
        write!(f, "{}{}: {}", self.label, ".".repeat(dots), self.value)
    }
}

/// Ordered report lines for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportLines(Vec<ReportLine>);

impl ReportLines {
    fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.0.push(ReportLine {
            label,
            value: value.into(),
        });
    }

    /// Value of the first line with the given label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportLine> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReportLines {
    type Item = &'a ReportLine;
    type IntoIter = std::slice::Iter<'a, ReportLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for ReportLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.0 {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Render a record as labeled lines.
///
/// The `size` line is only present when the data/file type gives TInfo a
/// size meaning.
pub fn render(record: &SauceRecord) -> ReportLines {
    let mut lines = ReportLines::default();

    lines.push("id", String::from_utf8_lossy(record.id()));
    lines.push("version", String::from_utf8_lossy(&record.version()));
    lines.push("title", record.title());
    lines.push("author", record.author());
    lines.push("group", record.group());
    lines.push("date", record.date().to_string());
    lines.push("filesize", record.file_size().to_string());
    lines.push(
        "datatype",
        format!(
            "{} ({})",
            record.data_type(),
            record.data_type_name().unwrap_or("")
        ),
    );

    let file_type = if catalog::has_file_type_table(record.data_type()) {
        format!(
            "{} ({})",
            record.file_type(),
            record.file_type_name().unwrap_or("")
        )
    } else {
        record.file_type().to_string()
    };
    lines.push("filetype", file_type);

    let [t1, t2, t3, t4] = record.type_info();
    lines.push("tinfo", format!("{t1}, {t2}, {t3}, {t4}"));
    lines.push("comments", record.comment_count().to_string());
    lines.push("flags", format!("0x{:02X}", record.flags()));

    if let Some(dims) = record.dimensions() {
        lines.push("size", dims.to_string());
    }

    lines
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
