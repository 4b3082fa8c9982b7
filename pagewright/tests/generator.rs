use pagewright::{escape, pdf::Reference, Generator, PageLayout, PwError};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

fn sample() -> Generator {
    let mut generator = Generator::new();
    generator
        .add_content("<h1>Quarterly (draft)</h1>")
        .add_content(r#"<p>See <a href="https://example.com">the site</a> and C:\temp</p>"#)
        .add_content("<strong>Grüße</strong> from <em>Köln</em>");
    generator
}

#[test]
fn xref_offsets_point_at_object_markers() {
    init();
    let layout = sample().encode().unwrap();
    assert_eq!(layout.offsets.len(), 6);
    for number in 1..=5 {
        let marker = format!("{} 0 obj\n", number);
        let position = find(&layout.bytes, marker.as_bytes()).unwrap();
        assert_eq!(layout.offsets[number], position, "object {}", number);
    }
}

#[test]
fn startxref_points_at_xref_keyword() {
    init();
    let layout = sample().encode().unwrap();
    let xref = rfind(&layout.bytes, b"\nxref\n").unwrap() + 1;
    assert_eq!(layout.startxref, xref);

    let tail = format!("startxref\n{}\n%%EOF", xref);
    assert!(layout.bytes.ends_with(tail.as_bytes()));
}

#[test]
fn xref_entries_are_twenty_bytes() {
    let layout = sample().encode().unwrap();
    let table_start = layout.startxref + b"xref\n0 6\n".len();
    let table = &layout.bytes[table_start..table_start + 6 * 20];
    assert_eq!(&table[..20], b"0000000000 65535 f \n");
    for (number, entry) in table.chunks(20).enumerate().skip(1) {
        let expected = format!("{:010} 00000 n \n", layout.offsets[number]);
        assert_eq!(entry, expected.as_bytes());
    }
    assert!(layout.bytes[table_start + 6 * 20..].starts_with(b"trailer\n<< /Root 1 0 R /Size 6 >>\n"));
}

#[test]
fn stream_length_matches_data() {
    init();
    let generator = sample();
    let bytes = generator.to_bytes().unwrap();

    let start = find(&bytes, b"stream\n").unwrap() + b"stream\n".len();
    let end = find(&bytes, b"\nendstream").unwrap();
    let declared = format!("/Length {} >>", end - start);
    assert!(find(&bytes, declared.as_bytes()).is_some());

    assert_eq!(end - start, escape(generator.content()).len() + 44);
}

#[test]
fn heading_scenario() {
    let mut generator = Generator::new();
    generator.add_content("<h1>Hi</h1>");
    assert_eq!(generator.content(), ">>> Hi <<<\n");

    let text = String::from_utf8(generator.to_bytes().unwrap()).unwrap();
    assert!(text.contains(r"(>>> Hi <<<\n) Tj"));
    assert!(text.contains("<< /Length 56 >>\nstream\n"));
}

#[test]
fn special_characters_are_escaped() {
    let mut generator = Generator::new();
    generator.add_content("a (b) c\\d");
    let text = String::from_utf8(generator.to_bytes().unwrap()).unwrap();
    assert!(text.contains(r"(a \(b\) c\\d\n) Tj"));
}

#[test]
fn lengths_are_counted_in_bytes() {
    let mut generator = Generator::new();
    generator.add_content("héllo");
    let text = String::from_utf8(generator.to_bytes().unwrap()).unwrap();
    // "héllo" is six bytes, the escaped line break two more
    assert!(text.contains("<< /Length 52 >>"));
}

#[test]
fn object_graph_is_complete() {
    let text = String::from_utf8(sample().to_bytes().unwrap()).unwrap();
    assert!(text.contains("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n"));
    assert!(text.contains("2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n"));
    assert!(text.contains(
        "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>\nendobj\n"
    ));
    assert!(text.contains("5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n"));
}

#[test]
fn generated_file_reads_back() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let generator = sample();
    generator.generate(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, generator.to_bytes().unwrap());

    let read_back = pagewright::read_file(&path).unwrap();
    assert_eq!(read_back.trailer.size, 6);
    assert_eq!(read_back.trailer.root, Reference::new(1, 0));
    assert_eq!(read_back.objects.len(), 5);
    assert_eq!(read_back.startxref, generator.encode().unwrap().startxref);

    let content = read_back.page_content().unwrap();
    let data = String::from_utf8(content.data.to_vec()).unwrap();
    assert!(data.starts_with("BT /F1 24 Tf 28.8 TL 0 g 100 700 Td (>>> Quarterly \\(draft\\) <<<\\n"));
    assert!(data.ends_with(") Tj ET"));
}

#[test]
fn generate_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    std::fs::write(&path, vec![b'x'; 100_000]).unwrap();

    let generator = Generator::with_layout(PageLayout::new().with_origin(72, 720));
    generator.generate(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), generator.to_bytes().unwrap());
}

#[test]
fn unwritable_path_is_reported() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.pdf");

    let err = sample().generate(&path).unwrap_err();
    match err {
        PwError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected error {:?}", other),
    }
    assert!(!path.exists());
}

#[test]
fn reading_garbage_fails() {
    assert!(matches!(pagewright::read(b"not a pdf"), Err(PwError::Parse(_))));

    let mut bytes = sample().to_bytes().unwrap();
    let len = bytes.len();
    bytes.truncate(len - 10);
    assert!(pagewright::read(&bytes).is_err());
}

#[test]
fn non_finite_layout_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let generator = Generator::with_layout(PageLayout::new().with_gray(f32::NAN));
    let err = generator.generate(&path).unwrap_err();
    assert!(matches!(err, PwError::NonFiniteLayout { field: "gray" }));
    assert!(!path.exists());
}
