/// Decode a fixed-width Latin-1 text field.
///
/// Every byte maps to the code point of the same value, so no byte is ever
/// rejected. Leading and trailing spaces and control characters (space
/// padding, NUL fill, a stray EOF marker) are trimmed. Other whitespace such
/// as 0xA0 is text in CP437 art and is kept.
pub fn read_latin1_trimmed(buf: &[u8]) -> String {
    let s: String = buf.iter().map(|&b| b as char).collect();
    s.trim_matches(|c: char| c == ' ' || c.is_control())
        .to_string()
}

/// Parse a run of ASCII decimal digits.
///
/// Returns `None` for an empty slice, any non-digit byte, or overflow.
/// Surrounding spaces are not accepted.
pub fn parse_decimal(buf: &[u8]) -> Option<u32> {
    if buf.is_empty() {
        return None;
    }
    buf.iter().try_fold(0u32, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

pub(crate) fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

pub(crate) fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}
