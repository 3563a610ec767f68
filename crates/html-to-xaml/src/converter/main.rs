//! Main conversion pipeline for HTML to XAML.
//!
//! This module owns the closed tag vocabulary and the recursive dispatcher that walks
//! the parsed HTML tree once, depth-first, appending XAML to a single output buffer.

use crate::converter::block::heading::push_heading;
use crate::converter::block::table::push_table;
use crate::converter::block::{push_blockquote, push_paragraph, push_span};
use crate::converter::inline::link::push_anchor;
use crate::converter::inline::media::push_image;
use crate::converter::inline::{push_bold, push_italic, push_line_break, push_underline};
use crate::converter::list::{push_ordered_list, push_unordered_list};
use crate::dom::{HtmlElement, HtmlNode, parse_fragment};
use crate::entities::preprocess_entities;
use crate::error::Result;
use crate::options::ConversionOptions;
use crate::serialize::normalize;
use crate::text::escape_text;

const PRESENTATION_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml/presentation";
const XAML_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml";

pub(crate) const PARAGRAPH_OPEN: &str = r#"<Paragraph LineStackingStrategy="MaxHeight">"#;
pub(crate) const PARAGRAPH_CLOSE: &str = "</Paragraph>";
pub(crate) const EMPTY_PARAGRAPH: &str = "<Paragraph/>";
pub(crate) const LINE_BREAK: &str = "<LineBreak/>";

/// Supported HTML tags. Anything else is dropped together with its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Text,
    Span,
    Div,
    Paragraph,
    Blockquote,
    OrderedList,
    UnorderedList,
    Table,
    /// `b`, `strong` and `em`.
    Bold,
    Italic,
    Underline,
    Anchor,
    Image,
    LineBreak,
    /// `h1`..`h6`, carrying the level.
    Heading(u8),
}

impl Tag {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        let tag = match name {
            "span" => Self::Span,
            "div" => Self::Div,
            "p" => Self::Paragraph,
            "blockquote" => Self::Blockquote,
            "ol" => Self::OrderedList,
            "ul" => Self::UnorderedList,
            "table" => Self::Table,
            "b" | "strong" | "em" => Self::Bold,
            "i" => Self::Italic,
            "u" => Self::Underline,
            "a" => Self::Anchor,
            "img" => Self::Image,
            "br" => Self::LineBreak,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            _ => return None,
        };
        Some(tag)
    }

    /// Inline content that must sit inside a `Paragraph` when it appears at the top level.
    pub(crate) const fn wraps_at_root(self) -> bool {
        matches!(
            self,
            Self::Image
                | Self::Bold
                | Self::Italic
                | Self::Underline
                | Self::Anchor
                | Self::LineBreak
                | Self::Table
                | Self::Span
                | Self::Div
                | Self::Blockquote
                | Self::Text
        )
    }
}

/// Converts HTML to XAML.
///
/// Named entities are rewritten to numeric references, the fragment is parsed and
/// walked, and the assembled markup is re-rendered when `options.format_output` is set.
/// Empty input yields an empty string.
pub(crate) fn convert_html(html: &str, options: &ConversionOptions) -> Result<String> {
    let _span = tracing::info_span!("html_to_xaml", bytes = html.len()).entered();

    if html.is_empty() {
        tracing::debug!("empty input, nothing to convert");
        return Ok(String::new());
    }

    let preprocessed = preprocess_entities(html);
    let nodes = parse_fragment(&preprocessed)?;
    let xaml = convert_nodes(&nodes, options);

    tracing::info!(bytes = xaml.len(), "HTML converted to XAML");
    Ok(xaml)
}

/// Converts an already parsed fragment to XAML. The tree is only read.
pub(crate) fn convert_nodes(nodes: &[HtmlNode], options: &ConversionOptions) -> String {
    let mut output = String::with_capacity(1024);
    push_document_open(&mut output, options);
    process_children(nodes, true, &mut output);
    output.push_str("</RichTextBlock>");

    if options.format_output {
        normalize(&output, options.indent_width)
    } else {
        output
    }
}

fn push_document_open(output: &mut String, options: &ConversionOptions) {
    output.push_str(&format!(
        r#"<RichTextBlock xmlns="{PRESENTATION_NAMESPACE}" xmlns:x="{XAML_NAMESPACE}"><RichTextBlock.Resources>"#
    ));
    output.push_str(r#"<Style x:Key="ViewboxImageStyle" TargetType="Viewbox">"#);
    output.push_str(r#"<Setter Property="Stretch" Value="Uniform"/><Setter Property="StretchDirection" Value="DownOnly"/>"#);
    output.push_str(&format!(
        r#"<Setter Property="MaxHeight" Value="{}"/><Setter Property="MaxWidth" Value="{}"/></Style>"#,
        options.image_max_height, options.image_max_width
    ));
    output.push_str(&format!(
        r#"<SolidColorBrush x:Key="AppForegroundColor" Color="{}"/>"#,
        escape_text(&options.link_foreground)
    ));
    output.push_str("</RichTextBlock.Resources>");
}

/// Dispatch one node to its handler, wrapping root-level inline content in a paragraph.
pub(crate) fn process_node(node: &HtmlNode, is_root: bool, output: &mut String) {
    match node {
        HtmlNode::Text(text) => {
            wrap_at_root(Tag::Text, is_root, output, |output| output.push_str(&escape_text(text)));
        }
        HtmlNode::Element(element) => {
            let Some(tag) = Tag::from_name(&element.name) else {
                tracing::debug!(tag = %element.name, "dropping unsupported element");
                return;
            };
            wrap_at_root(tag, is_root, output, |output| dispatch_element(tag, element, is_root, output));
        }
    }
}

fn wrap_at_root(tag: Tag, is_root: bool, output: &mut String, emit: impl FnOnce(&mut String)) {
    let wrap = is_root && tag.wraps_at_root();
    if wrap {
        output.push_str(PARAGRAPH_OPEN);
    }
    emit(output);
    if wrap {
        output.push_str(PARAGRAPH_CLOSE);
    }
}

fn dispatch_element(tag: Tag, element: &HtmlElement, is_root: bool, output: &mut String) {
    match tag {
        Tag::Span | Tag::Div => push_span(element, output),
        Tag::Paragraph => push_paragraph(element, is_root, output),
        Tag::Blockquote => push_blockquote(element, output),
        Tag::OrderedList => push_ordered_list(element, is_root, output),
        Tag::UnorderedList => push_unordered_list(element, is_root, output),
        Tag::Table => push_table(element, output),
        Tag::Bold => push_bold(element, output),
        Tag::Italic => push_italic(element, output),
        Tag::Underline => push_underline(element, output),
        Tag::Anchor => push_anchor(element, output),
        Tag::Image => push_image(element, output),
        Tag::LineBreak => push_line_break(output),
        Tag::Heading(level) => push_heading(element, level, is_root, output),
        // Text nodes never reach element dispatch.
        Tag::Text => {}
    }
}

/// Process each child with the same root flag.
pub(crate) fn process_children<'a>(
    children: impl IntoIterator<Item = &'a HtmlNode>,
    is_root: bool,
    output: &mut String,
) {
    for child in children {
        process_node(child, is_root, output);
    }
}
