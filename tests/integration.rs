//! Integration tests for the slide handouts library

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};
use slide_handouts::config::HandoutConfig;
use slide_handouts::pdf::{count_pages, split_pdf};
use slide_handouts::pipeline::prepare_handout;
use slide_handouts::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test helper to build an N-page PDF whose pages read "Page 1", "Page 2", ...
fn create_test_pdf(path: &Path, num_pages: u32) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut font = Dictionary::new();
    font.set("Type", Object::Name(b"Font".to_vec()));
    font.set("Subtype", Object::Name(b"Type1".to_vec()));
    font.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    let font_id = doc.add_object(Object::Dictionary(font));

    let mut page_ids = Vec::new();
    for i in 0..num_pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(24)]),
                Operation::new("Td", vec![Object::Integer(100), Object::Integer(400)]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("Page {}", i + 1))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Reference(font_id));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));

        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(pages_id));
        page.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(720),
                Object::Integer(540),
            ]),
        );
        page.set("Resources", Object::Dictionary(resources));
        page.set("Contents", Object::Reference(content_id));
        page_ids.push(doc.add_object(Object::Dictionary(page)));
    }

    let mut pages = Dictionary::new();
    pages.set("Type", Object::Name(b"Pages".to_vec()));
    pages.set("Count", Object::Integer(num_pages as i64));
    pages.set(
        "Kids",
        Object::Array(page_ids.iter().map(|&id| Object::Reference(id)).collect()),
    );
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc.save(path).expect("Failed to save test PDF");
}

/// Text content of the only page of a split file
fn single_page_content(path: &Path) -> String {
    let doc = Document::load(path).expect("Failed to load split page");
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "{} should hold exactly one page", path.display());

    let page_id = *pages.values().next().unwrap();
    let content = doc.get_page_content(page_id).expect("Failed to read page content");
    String::from_utf8_lossy(&content).into_owned()
}

fn config(pdf: PathBuf, folder: PathBuf, json_sets: &str) -> HandoutConfig {
    let text = format!(
        r#"{{"pdf": {:?}, "folder": {:?}, {}}}"#,
        pdf.to_str().unwrap(),
        folder.to_str().unwrap(),
        json_sets
    );
    HandoutConfig::from_json(&text).expect("Failed to parse config")
}

#[test]
fn test_split_writes_one_file_per_page_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("deck.pdf");
    create_test_pdf(&source, 5);
    assert_eq!(count_pages(&source).unwrap(), 5);

    let out_dir = temp_dir.path().join("pages");
    fs::create_dir(&out_dir).unwrap();

    let page_count = split_pdf(&source, &out_dir).expect("Failed to split PDF");
    assert_eq!(page_count, 5);

    let mut names: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["slide_0.pdf", "slide_1.pdf", "slide_2.pdf", "slide_3.pdf", "slide_4.pdf"]
    );

    for i in 0..5 {
        let content = single_page_content(&out_dir.join(format!("slide_{}.pdf", i)));
        assert!(
            content.contains(&format!("(Page {})", i + 1)),
            "slide_{}.pdf should hold page {}: {}",
            i,
            i + 1,
            content
        );
    }
}

#[test]
fn test_split_single_page_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("one.pdf");
    create_test_pdf(&source, 1);

    let page_count = split_pdf(&source, temp_dir.path()).unwrap();

    assert_eq!(page_count, 1);
    assert!(temp_dir.path().join("slide_0.pdf").exists());
    assert!(!temp_dir.path().join("slide_1.pdf").exists());
}

#[test]
fn test_split_into_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("deck.pdf");
    create_test_pdf(&source, 2);

    let result = split_pdf(&source, &temp_dir.path().join("missing"));
    assert!(result.is_err(), "Should fail when the output directory is absent");
}

#[test]
fn test_split_malformed_source_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("broken.pdf");
    fs::write(&source, b"this is not a pdf").unwrap();

    let result = split_pdf(&source, temp_dir.path());
    assert!(matches!(result, Err(Error::Pdf(_))));
}

#[test]
fn test_prepare_handout_builds_folder() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("deck.pdf");
    create_test_pdf(&source, 6);
    let folder = temp_dir.path().join("handouts");

    let config = config(
        source,
        folder.clone(),
        r#""thumbnail": [1, 2, 3], "normal": [5], "large": [6]"#,
    );

    let prepared = prepare_handout(&config).expect("Failed to prepare handout");

    assert_eq!(prepared.page_count, 6);
    assert_eq!(prepared.slide_count, 5);
    assert_eq!(prepared.tex_path, folder.join("handouts.tex"));
    assert!(folder.join("lines.pdf").exists());
    for i in 0..6 {
        assert!(folder.join(format!("pdf_pages/slide_{}.pdf", i)).exists());
    }

    let tex = fs::read_to_string(&prepared.tex_path).unwrap();
    assert_eq!(tex.matches("\\begin{document}").count(), 1);
    assert_eq!(tex.matches("\\end{document}").count(), 1);
    // Page 4 is in no set
    assert!(!tex.contains("slide_3.pdf"));

    let positions: Vec<usize> = [0, 1, 2, 4, 5]
        .iter()
        .map(|i| tex.find(&format!("pdf_pages/slide_{}.pdf", i)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "pages out of order");

    // The run of three thumbnails gets one filler, the normal page its lines
    assert_eq!(tex.matches("\\includegraphics[width=3.5in]{lines.pdf}").count(), 2);
    assert_eq!(tex.matches("\\includegraphics[width=6.5in]").count(), 1);
}

#[test]
fn test_prepare_handout_refuses_existing_folder() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("deck.pdf");
    create_test_pdf(&source, 2);
    let folder = temp_dir.path().join("handouts");
    fs::create_dir(&folder).unwrap();

    let config = config(source, folder.clone(), r#""thumbnail": [1, 2]"#);
    let result = prepare_handout(&config);

    assert!(matches!(result, Err(Error::OutputExists(_))));
    assert!(!folder.join("pdf_pages").exists());
}

#[test]
fn test_prepare_handout_missing_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = config(
        temp_dir.path().join("nonexistent.pdf"),
        temp_dir.path().join("handouts"),
        r#""thumbnail": [1]"#,
    );

    let result = prepare_handout(&config);
    assert!(matches!(result, Err(Error::FileNotFound(_))));
}

#[test]
fn test_load_malformed_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("handouts.json");
    fs::write(&path, "{ not json").unwrap();

    let result = HandoutConfig::load(&path);
    match result {
        Err(e @ Error::Config { .. }) => {
            assert!(e.to_string().contains("handouts.json"), "{}", e);
        }
        other => panic!("expected a config error, got {:?}", other),
    }
}
