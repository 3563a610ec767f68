//! Property tests for escaping, entity preprocessing and conversion output.

use html_to_xaml::text::escape_text;
use html_to_xaml::{ConversionOptions, convert, preprocess_entities};
use proptest::prelude::*;

const CONTAINER_TAGS: &[&str] = &[
    "b", "strong", "em", "i", "u", "span", "div", "p", "blockquote", "h1", "h3", "h6", "section",
];

fn list(tag: &str, items: Vec<String>) -> String {
    let body: String = items.iter().map(|item| format!("<li>{item}</li>")).collect();
    format!("<{tag}>{body}</{tag}>")
}

fn table(rows: Vec<Vec<String>>) -> String {
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(index, cells)| {
            let cell_tag = if index == 0 { "th" } else { "td" };
            let cells: String = cells.iter().map(|cell| format!("<{cell_tag}>{cell}</{cell_tag}>")).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();
    format!("<table>{body}</table>")
}

/// Well-formed HTML built from the supported vocabulary plus an unsupported `section`.
fn html_fragment() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-zA-Z0-9 .,!?&]{0,12}",
        Just("<br>".to_string()),
        Just("&copy;&nbsp;&amp;".to_string()),
        "[a-z]{1,8}".prop_map(|name| format!(r#"<img src="http://x/{name}.png?q=1">"#)),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        let children = prop::collection::vec(inner, 0..4).prop_map(|parts| parts.concat());
        prop_oneof![
            (prop::sample::select(CONTAINER_TAGS), children.clone())
                .prop_map(|(tag, body)| format!("<{tag}>{body}</{tag}>")),
            children
                .clone()
                .prop_map(|body| format!(r#"<a href="http://x/page?a=1">{body}</a>"#)),
            prop::collection::vec(children.clone(), 1..4).prop_map(|items| list("ol", items)),
            prop::collection::vec(children.clone(), 1..4).prop_map(|items| list("ul", items)),
            prop::collection::vec(prop::collection::vec(children, 0..4), 0..4).prop_map(table),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn conversion_of_well_formed_html_is_well_formed(html in html_fragment()) {
        let raw = convert(&html, Some(ConversionOptions::default().with_format_output(false))).unwrap();
        prop_assert!(roxmltree::Document::parse(&raw).is_ok(), "raw output not well-formed: {}", raw);

        let formatted = convert(&html, None).unwrap();
        prop_assert!(roxmltree::Document::parse(&formatted).is_ok(), "formatted output not well-formed: {}", formatted);
    }

    #[test]
    fn conversion_never_panics(input in "\\PC{0,200}") {
        let _ = convert(&input, None);
    }

    #[test]
    fn preprocessing_without_named_entities_is_identity(input in "[^&]{0,200}") {
        prop_assert_eq!(preprocess_entities(&input), input.as_str());
    }

    #[test]
    fn preprocessing_ignores_unterminated_references(input in "[a-z &#0-9<>]{0,100}") {
        prop_assert_eq!(preprocess_entities(&input), input.as_str());
    }

    #[test]
    fn text_without_reserved_characters_is_unchanged(text in "[^&<>\"'\\p{Cc}]{0,100}") {
        prop_assert_eq!(escape_text(&text), text.as_str());
    }

    #[test]
    fn escaped_text_round_trips_through_xml(text in "[\\PC&&[^&]]{0,100}") {
        let escaped = escape_text(&text);
        let xml = format!(r#"<t a="{escaped}">{escaped}</t>"#);
        let document = roxmltree::Document::parse(&xml).unwrap();
        let root = document.root_element();
        prop_assert_eq!(root.text().unwrap_or_default(), text.as_str());
        prop_assert_eq!(root.attribute("a").unwrap_or_default(), text.as_str());
    }
}
