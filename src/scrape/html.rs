use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

use crate::db::schema::MappingEntry;

static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

/// Elements that start a new line inside a cell, so that multi-line
/// conditions keep one guard per line.
const LINE_BREAK_TAGS: &[&str] = &["br", "p", "li", "div"];

/// Read the mapping rows of the first table on a documentation page.
///
/// The first row is the header. Rows with fewer than two data cells are
/// ignored; only the first two cells of a row are used.
pub fn extract_mappings_from_html(html: &str) -> Vec<MappingEntry> {
    let document = Html::parse_document(html);

    let Some(table) = document.select(&TABLE_SELECTOR).next() else {
        return Vec::new();
    };

    table
        .select(&ROW_SELECTOR)
        .skip(1)
        .filter_map(|row| {
            let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();
            if cells.len() < 2 {
                return None;
            }
            Some(MappingEntry::new(cell_text(cells[0]), cell_text(cells[1])))
        })
        .collect()
}

fn cell_text(cell: ElementRef) -> String {
    let mut text = String::new();
    for node in cell.descendants() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(el) if LINE_BREAK_TAGS.contains(&el.name()) => text.push('\n'),
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
