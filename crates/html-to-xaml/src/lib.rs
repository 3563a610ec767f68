//! Convert HTML fragments into `RichTextBlock` XAML.
//!
//! The converter walks a parsed HTML fragment once and emits a small rich-text
//! vocabulary: paragraphs, spans, runs, bold/italic/underline, hyperlinks, images,
//! lists and grid tables. Unsupported tags are dropped along with their content.
//!
//! ```
//! use html_to_xaml::{ConversionOptions, convert};
//!
//! let options = ConversionOptions::default().with_format_output(false);
//! let xaml = convert("<b>Hello</b>", Some(options)).unwrap();
//! assert!(xaml.contains(r#"<Paragraph LineStackingStrategy="MaxHeight"><Bold>Hello</Bold></Paragraph>"#));
//! ```

mod converter;
pub mod dom;
pub mod entities;
pub mod error;
pub mod numbering;
pub mod options;
pub mod serialize;
pub mod text;

pub use dom::{HtmlElement, HtmlNode, parse_fragment};
pub use entities::preprocess_entities;
pub use error::{ConversionError, Result};
pub use options::ConversionOptions;

/// Convert an HTML fragment to XAML.
///
/// Empty input returns an empty string. When the assembled markup cannot be
/// re-rendered as well-formed XML it is returned unformatted rather than failing.
///
/// # Errors
///
/// Returns [`ConversionError::ParseError`] if the HTML cannot be parsed, even after
/// repair.
pub fn convert(html: &str, options: Option<ConversionOptions>) -> Result<String> {
    let options = options.unwrap_or_default();
    converter::convert_html(html, &options)
}

/// Convert an already parsed fragment to XAML.
///
/// Text nodes are emitted as they are, so named entities other than the five XML
/// ones should already be numeric references (see [`preprocess_entities`]).
#[must_use]
pub fn convert_nodes(nodes: &[HtmlNode], options: &ConversionOptions) -> String {
    converter::convert_nodes(nodes, options)
}
