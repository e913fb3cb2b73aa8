use textbook_background_server::document::{build_docx, render_docx, BODY_FONT};

#[test]
fn rendered_document_is_a_zip_archive() {
    let paragraphs = vec!["朱自清，原名自华。".to_string(), "写作背景如下。".to_string()];
    let bytes = render_docx(&paragraphs, 12.0, 1.5).expect("render failed");
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn archive_contains_the_main_document_part() {
    let paragraphs = vec!["正文。".to_string()];
    let bytes = render_docx(&paragraphs, 12.0, 1.5).expect("render failed");
    // Zip entry names are stored uncompressed in the local file headers.
    assert!(bytes
        .windows(b"word/document.xml".len())
        .any(|window| window == b"word/document.xml"));
}

#[test]
fn empty_paragraph_list_still_produces_a_document() {
    let bytes = render_docx(&[], 10.5, 1.0).expect("render failed");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn body_font_is_the_fixed_cjk_family() {
    assert_eq!(BODY_FONT, "微软雅黑");
}

#[test]
fn runs_carry_uniform_font_size_and_spacing() {
    let paragraphs = vec!["朱自清，原名自华。".to_string()];
    let xml = String::from_utf8(build_docx(&paragraphs, 12.0, 1.5).build().document)
        .expect("document part is not UTF-8");

    assert!(xml.contains("朱自清，原名自华。"));
    // The family must land in both the default and the east-asia slot.
    assert!(xml.contains(r#"w:ascii="微软雅黑""#));
    assert!(xml.contains(r#"w:eastAsia="微软雅黑""#));
    // 12pt is 24 half-points.
    assert!(xml.contains(r#"<w:sz w:val="24""#));
    // Bold is forced off, not merely unset.
    assert!(xml.contains(r#"<w:b w:val="false""#) || xml.contains(r#"<w:b w:val="0""#));
    assert!(!xml.contains("<w:b/>"));
    // 1.5 line spacing is 360 240ths, with the fixed 5pt space-after.
    assert!(xml.contains(r#"w:line="360""#));
    assert!(xml.contains(r#"w:lineRule="auto""#));
    assert!(xml.contains(r#"w:after="100""#));
}

#[test]
fn run_size_follows_the_requested_font_size() {
    let paragraphs = vec!["正文。".to_string()];
    let xml = String::from_utf8(build_docx(&paragraphs, 10.5, 1.0).build().document)
        .expect("document part is not UTF-8");
    assert!(xml.contains(r#"<w:sz w:val="21""#));
    assert!(xml.contains(r#"w:line="240""#));
}
