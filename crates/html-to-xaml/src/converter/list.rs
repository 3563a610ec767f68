//! Ordered and unordered lists.
//!
//! Each `li` becomes an indented paragraph starting with its label or bullet. A list
//! nested inside other content is hosted in its own `RichTextBlock`, because
//! paragraphs cannot appear inside inlines.

use crate::converter::main::{EMPTY_PARAGRAPH, process_children};
use crate::dom::HtmlElement;
use crate::numbering::LabelStyle;

const ITEM_OPEN: &str = r#"<Paragraph Margin="20,0,0,0"><Span>"#;
const ITEM_CLOSE: &str = "</Span></Paragraph>";
const LABEL_GAP: &str = "&#xA0;&#xA0;&#xA0;";
const NESTED_REGION_OPEN: &str = "<InlineUIContainer><RichTextBlock>";
const NESTED_REGION_CLOSE: &str = "</RichTextBlock></InlineUIContainer>";

/// Bullet glyph for a `ul`/`li` `type` value. Matching is case-sensitive.
pub(crate) fn bullet_glyph(list_type: &str) -> &'static str {
    match list_type {
        "disc" => "&#x25CF;",
        "circle" => "&#x25CB;",
        "square" => "&#x25A0;",
        _ => "&#x2022;",
    }
}

/// The `li` elements below a list, in document order.
///
/// Items of nested lists are included too, so they appear both in their own list
/// and as items of every enclosing list.
pub(crate) fn list_items(list: &HtmlElement) -> Vec<&HtmlElement> {
    list.descendant_elements("li").collect()
}

/// Read a `start`/`value` attribute as a 32-bit ordinal.
///
/// Values that do not fit are treated as absent, which bounds the length of Roman
/// labels.
fn parse_ordinal(value: Option<&str>) -> Option<i32> {
    value?.trim().parse().ok()
}

fn open_list(is_root: bool, output: &mut String) {
    if !is_root {
        output.push_str(NESTED_REGION_OPEN);
    }
}

fn close_list(is_root: bool, output: &mut String) {
    output.push_str(EMPTY_PARAGRAPH);
    if !is_root {
        output.push_str(NESTED_REGION_CLOSE);
    }
}

/// Convert an `ol`.
///
/// Numbering starts at `start` (default 1). An item's `value` resets the counter for
/// itself and the items after it. An item's `type` overrides the list's `type`.
pub(crate) fn push_ordered_list(element: &HtmlElement, is_root: bool, output: &mut String) {
    open_list(is_root, output);

    let mut ordinal = parse_ordinal(element.attr("start")).unwrap_or(1);
    let list_type = element.attr("type").unwrap_or("1");
    for item in list_items(element) {
        if let Some(value) = parse_ordinal(item.attr("value")) {
            ordinal = value;
        }
        let style = LabelStyle::from_type_attr(item.attr("type").unwrap_or(list_type));

        output.push_str(ITEM_OPEN);
        output.push_str(&format!("<Bold>{}.{LABEL_GAP}</Bold>", style.label(i64::from(ordinal))));
        process_children(&item.children, false, output);
        output.push_str(ITEM_CLOSE);

        ordinal = ordinal.wrapping_add(1);
    }

    close_list(is_root, output);
}

/// Convert a `ul`. An item's `type` overrides the list's bullet (default `disc`).
pub(crate) fn push_unordered_list(element: &HtmlElement, is_root: bool, output: &mut String) {
    open_list(is_root, output);

    let list_type = element.attr("type").unwrap_or("disc");
    for item in list_items(element) {
        let glyph = bullet_glyph(item.attr("type").unwrap_or(list_type));

        output.push_str(ITEM_OPEN);
        output.push_str(glyph);
        output.push_str(LABEL_GAP);
        process_children(&item.children, false, output);
        output.push_str(ITEM_CLOSE);
    }

    close_list(is_root, output);
}
