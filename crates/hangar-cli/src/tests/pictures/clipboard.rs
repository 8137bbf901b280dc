use crate::pictures::{
    ClipboardItem, PasteOutcome, classify_paste, extension_for, sniff_image_mime,
};

const PNG: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

#[test]
fn test_sniff_known_formats() {
    assert_eq!(sniff_image_mime(&PNG), Some("image/png"));
    assert_eq!(sniff_image_mime(&JPEG), Some("image/jpeg"));
    assert_eq!(sniff_image_mime(b"GIF89a"), Some("image/gif"));
    assert_eq!(sniff_image_mime(b"RIFF\0\0\0\0WEBPVP8 "), Some("image/webp"));
    assert_eq!(
        sniff_image_mime(&[b'B', b'M', 1, 2, 3, 4, 0, 0, 0, 0, 54]),
        Some("image/bmp")
    );
}

#[test]
fn test_sniff_rejects_text() {
    assert_eq!(sniff_image_mime(b"BMW 328 in 1/24 scale"), None);
    assert_eq!(sniff_image_mime(b"https://example.com/a.png"), None);
    assert_eq!(sniff_image_mime(b""), None);
}

#[test]
fn test_from_bytes_classifies_stdin_content() {
    assert_eq!(ClipboardItem::from_bytes(PNG.to_vec()).mime, "image/png");
    assert_eq!(ClipboardItem::from_bytes(b"hello".to_vec()).mime, "text/plain");
}

#[test]
fn given_image_items_when_classified_then_files_are_named_by_type() {
    let outcome = classify_paste(vec![
        ClipboardItem::new("image/png", PNG.to_vec()),
        ClipboardItem::new("image/jpeg", JPEG.to_vec()),
    ]);

    let PasteOutcome::Files(files) = outcome.clone() else {
        panic!("expected files, got {outcome:?}");
    };
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "image.png");
    assert_eq!(files[0].content_type, "image/png");
    assert_eq!(files[0].bytes, PNG.to_vec());
    assert_eq!(files[1].name, "image.jpg");
    assert_eq!(files[1].content_type, "image/jpeg");
}

#[test]
fn given_text_with_image_url_when_classified_then_url_wins() {
    let outcome = classify_paste(vec![
        ClipboardItem::new("image/png", PNG.to_vec()),
        ClipboardItem::text("  https://example.com/kit.png\n"),
    ]);

    assert_eq!(
        outcome,
        PasteOutcome::Url(String::from("https://example.com/kit.png"))
    );
}

#[test]
fn given_plain_text_when_classified_then_empty() {
    let outcome = classify_paste(vec![ClipboardItem::text("just some notes")]);
    assert_eq!(outcome, PasteOutcome::Empty);
}

#[test]
fn given_no_items_when_classified_then_empty() {
    assert_eq!(classify_paste(Vec::new()), PasteOutcome::Empty);
}

#[test]
fn test_extension_for_sniffed_types() {
    assert_eq!(extension_for("image/png"), "png");
    assert_eq!(extension_for("image/jpeg"), "jpg");
    assert_eq!(extension_for("image/gif"), "gif");
    assert_eq!(extension_for("image/webp"), "webp");
    assert_eq!(extension_for("image/bmp"), "bmp");
}

#[test]
fn test_extension_for_unknown_type_falls_back_to_png() {
    assert_eq!(extension_for("image/x-hangar-unknown"), "png");
}
