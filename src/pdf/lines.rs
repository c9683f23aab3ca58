//! Ruled-lines image used next to normal pages and after unpaired thumbnails

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};

use crate::error::Result;
use crate::layout::Length;

/// Page size of the generated image: 3.5in x 2.625in, the 4:3 shape of a slide
const PAGE_WIDTH: Length = Length::from_inches(3.5);
const PAGE_HEIGHT: Length = Length::from_inches(2.625);
/// Distance between rules
const RULE_SPACING: Length = Length::from_inches(0.25);
/// Inset of the rules from the page edges
const RULE_INSET: Length = Length::from_inches(0.125);
/// Rule gray level (0 = black, 1 = white)
const RULE_GRAY: f32 = 0.6;

/// Baselines of the rules, from the top of the page down, in points
fn rule_positions() -> Vec<f32> {
    let height = PAGE_HEIGHT.pt();
    let spacing = RULE_SPACING.pt();
    let inset = RULE_INSET.pt();

    let mut positions = Vec::new();
    let mut y = height - inset - spacing;
    while y >= inset {
        positions.push(y as f32);
        y -= spacing;
    }
    positions
}

/// Content stream drawing the rules across the page
fn rules_content() -> Result<Vec<u8>> {
    let left = RULE_INSET.pt() as f32;
    let right = (PAGE_WIDTH.pt() - RULE_INSET.pt()) as f32;

    let mut operations = vec![
        Operation::new("q", vec![]),
        Operation::new("G", vec![Object::Real(RULE_GRAY)]),
        Operation::new("w", vec![Object::Real(0.5)]),
    ];
    for y in rule_positions() {
        operations.push(Operation::new("m", vec![Object::Real(left), Object::Real(y)]));
        operations.push(Operation::new("l", vec![Object::Real(right), Object::Real(y)]));
    }
    operations.push(Operation::new("S", vec![]));
    operations.push(Operation::new("Q", vec![]));

    Ok(Content { operations }.encode()?)
}

/// Create a one-page PDF of horizontal ruled lines at `output`
pub fn create_lines_pdf(output: &Path) -> Result<()> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let content_id = doc.add_object(Stream::new(Dictionary::new(), rules_content()?));

    let mut page = Dictionary::new();
    page.set("Type", Object::Name(b"Page".to_vec()));
    page.set("Parent", Object::Reference(pages_id));
    page.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(PAGE_WIDTH.pt() as f32),
            Object::Real(PAGE_HEIGHT.pt() as f32),
        ]),
    );
    page.set("Resources", Object::Dictionary(Dictionary::new()));
    page.set("Contents", Object::Reference(content_id));
    let page_id = doc.add_object(Object::Dictionary(page));

    let mut pages = Dictionary::new();
    pages.set("Type", Object::Name(b"Pages".to_vec()));
    pages.set("Count", Object::Integer(1));
    pages.set("Kids", Object::Array(vec![Object::Reference(page_id)]));
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc.compress();
    doc.save(output)?;

    Ok(())
}
