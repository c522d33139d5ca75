use super::*;

use crate::fixtures::{TrailerFields, make_trailer};
use crate::record::parse_trailer;

fn render_fields(fields: &TrailerFields) -> ReportLines {
    let record = parse_trailer(&make_trailer(fields)).unwrap();
    render(&record)
}

#[test]
fn test_render_line_order() {
    let lines = render_fields(&TrailerFields::default());
    let labels: Vec<&str> = lines.iter().map(|l| l.label).collect();
    assert_eq!(
        labels,
        [
            "id", "version", "title", "author", "group", "date", "filesize", "datatype",
            "filetype", "tinfo", "comments", "flags", "size",
        ]
    );
}

#[test]
fn test_render_identity_fields() {
    let lines = render_fields(&TrailerFields {
        title: b"Dark Side",
        author: b"Luna",
        group: b"Mistigris",
        date: b"19990102",
        file_size: 4096,
        ..Default::default()
    });
    assert_eq!(lines.get("id"), Some("SAUCE"));
    assert_eq!(lines.get("version"), Some("00"));
    assert_eq!(lines.get("title"), Some("Dark Side"));
    assert_eq!(lines.get("author"), Some("Luna"));
    assert_eq!(lines.get("group"), Some("Mistigris"));
    assert_eq!(lines.get("date"), Some("1999-01-02"));
    assert_eq!(lines.get("filesize"), Some("4096"));
}

#[test]
fn test_render_ascii_zero_width_defaults_to_80() {
    let lines = render_fields(&TrailerFields {
        data_type: 1,
        file_type: 0,
        type_info: [0, 43, 0, 0],
        ..Default::default()
    });
    assert_eq!(lines.get("size"), Some("80 x 43 characters"));
    // Raw value is still reported as stored.
    assert_eq!(lines.get("tinfo"), Some("0, 43, 0, 0"));
}

#[test]
fn test_render_other_text_formats_default_to_80() {
    for (ft, name) in [
        (2u8, "ANSiMation"),
        (4, "PCBoard"),
        (5, "Avatar"),
        (8, "TundraDraw"),
    ] {
        let lines = render_fields(&TrailerFields {
            data_type: 1,
            file_type: ft,
            type_info: [0, 50, 0, 0],
            ..Default::default()
        });
        assert_eq!(lines.get("filetype"), Some(format!("{ft} ({name})").as_str()));
        assert_eq!(lines.get("size"), Some("80 x 50 characters"), "{name}");
    }
}

#[test]
fn test_render_ansi_size() {
    let lines = render_fields(&TrailerFields {
        data_type: 1,
        file_type: 1,
        type_info: [132, 60, 0, 0],
        ..Default::default()
    });
    assert_eq!(lines.get("datatype"), Some("1 (Character)"));
    assert_eq!(lines.get("filetype"), Some("1 (ANSi)"));
    assert_eq!(lines.get("size"), Some("132 x 60 characters"));
}

#[test]
fn test_render_rip_script_uses_pixels() {
    let lines = render_fields(&TrailerFields {
        data_type: 1,
        file_type: 3,
        type_info: [320, 200, 0, 0],
        ..Default::default()
    });
    assert_eq!(lines.get("filetype"), Some("3 (RIP script)"));
    assert_eq!(lines.get("size"), Some("320 x 200 pixels"));
}

#[test]
fn test_render_rip_script_zero_width_not_defaulted() {
    let lines = render_fields(&TrailerFields {
        data_type: 1,
        file_type: 3,
        type_info: [0, 200, 0, 0],
        ..Default::default()
    });
    assert_eq!(lines.get("size"), Some("0 x 200 pixels"));
}

#[test]
fn test_render_bitmap_gif_size() {
    let lines = render_fields(&TrailerFields {
        data_type: 2,
        file_type: 0,
        type_info: [640, 480, 8, 0],
        ..Default::default()
    });
    assert_eq!(lines.get("datatype"), Some("2 (Bitmap)"));
    assert_eq!(lines.get("filetype"), Some("0 (GIF)"));
    assert_eq!(lines.get("size"), Some("640 x 480 pixels"));
}

#[test]
fn test_render_html_has_no_size() {
    let lines = render_fields(&TrailerFields {
        data_type: 1,
        file_type: 6,
        ..Default::default()
    });
    assert_eq!(lines.get("filetype"), Some("6 (HTML)"));
    assert_eq!(lines.get("size"), None);
}

#[test]
fn test_render_audio_has_no_size() {
    let lines = render_fields(&TrailerFields {
        data_type: 4,
        file_type: 15,
        type_info: [44100, 0, 0, 0],
        ..Default::default()
    });
    assert_eq!(lines.get("filetype"), Some("15 (WAV)"));
    assert_eq!(lines.get("tinfo"), Some("44100, 0, 0, 0"));
    assert_eq!(lines.get("size"), None);
}

#[test]
fn test_render_unknown_data_type() {
    let lines = render_fields(&TrailerFields {
        data_type: 200,
        file_type: 7,
        ..Default::default()
    });
    assert_eq!(lines.get("datatype"), Some("200 ()"));
    assert_eq!(lines.get("filetype"), Some("7"));
    assert_eq!(lines.get("size"), None);
}

#[test]
fn test_render_binary_text_file_type_is_bare() {
    let lines = render_fields(&TrailerFields {
        data_type: 5,
        file_type: 80,
        ..Default::default()
    });
    assert_eq!(lines.get("datatype"), Some("5 (BinaryText)"));
    assert_eq!(lines.get("filetype"), Some("80"));
}

#[test]
fn test_render_unknown_file_type_in_table() {
    let lines = render_fields(&TrailerFields {
        data_type: 7,
        file_type: 42,
        ..Default::default()
    });
    assert_eq!(lines.get("filetype"), Some("42 ()"));
}

#[test]
fn test_render_comments_and_flags() {
    let lines = render_fields(&TrailerFields {
        comments: 2,
        flags: 0x13,
        ..Default::default()
    });
    assert_eq!(lines.get("comments"), Some("2"));
    assert_eq!(lines.get("flags"), Some("0x13"));
}

#[test]
fn test_render_display_pads_labels() {
    let lines = render_fields(&TrailerFields {
        title: b"Pad",
        ..Default::default()
    });
    let text = lines.to_string();
    assert!(text.starts_with("id......: SAUCE\n"));
    assert!(text.contains("version.: 00\n"));
    assert!(text.contains("title...: Pad\n"));
    assert!(text.contains("filesize: 0\n"));
    assert!(text.contains("comments: 0\n"));
    assert_eq!(text.lines().count(), lines.len());
}
