//! Owned, read-only HTML tree handed to the converter.
//!
//! Parsing goes through `tl`, which keeps character data undecoded so numeric
//! references written by entity preprocessing reach the output untouched. Input that
//! `tl` rejects is repaired with html5ever and parsed again.

use std::borrow::Cow;

use crate::entities::preprocess_entities;
use crate::error::{ConversionError, Result};

/// A node of a parsed HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// An element with attributes and children.
    Element(HtmlElement),
    /// Raw character data, exactly as it appeared in the source.
    Text(String),
}

/// An HTML element. Tag and attribute names are lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlElement {
    /// Lower-cased tag name.
    pub name: String,
    /// Attributes in source order; a value-less attribute has an empty value.
    pub attributes: Vec<(String, String)>,
    /// Child nodes in source order.
    pub children: Vec<HtmlNode>,
}

impl HtmlNode {
    /// Create a text node.
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(data.into())
    }

    /// Tag name of an element node, `None` for text.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Element(element) => Some(&element.name),
            Self::Text(_) => None,
        }
    }

    /// Borrow the element of an element node.
    #[must_use]
    pub const fn as_element(&self) -> Option<&HtmlElement> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Check whether this is a text node.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<HtmlElement> for HtmlNode {
    fn from(element: HtmlElement) -> Self {
        Self::Element(element)
    }
}

impl HtmlElement {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Append an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into().to_ascii_lowercase(), value.into()));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<HtmlNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn with_text(self, data: impl Into<String>) -> Self {
        self.with_child(HtmlNode::text(data))
    }

    /// Value of the first attribute called `name` (case-insensitive).
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// All nodes below this element, in document order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Descendant elements called `tag`, in document order.
    pub fn descendant_elements<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a HtmlElement> + 'a {
        self.descendants()
            .filter_map(HtmlNode::as_element)
            .filter(move |element| element.name == tag)
    }

    /// Descendant text nodes, in document order.
    pub fn text_descendants(&self) -> impl Iterator<Item = &HtmlNode> {
        self.descendants().filter(|node| node.is_text())
    }

    /// First child node, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<&HtmlNode> {
        self.children.first()
    }
}

/// Pre-order iterator over the descendants of an element.
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, HtmlNode>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a HtmlNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => {
                    if let HtmlNode::Element(element) = node {
                        self.stack.push(element.children.iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Parse an HTML fragment into owned top-level nodes.
///
/// # Errors
///
/// Returns [`ConversionError::ParseError`] when neither `tl` nor the html5ever
/// repair pass can make sense of the input.
pub fn parse_fragment(html: &str) -> Result<Vec<HtmlNode>> {
    let parser_options = tl::ParserOptions::default();
    if let Ok(dom) = tl::parse(html, parser_options) {
        return Ok(collect_nodes(dom.children().iter(), dom.parser()));
    }

    tracing::debug!(bytes = html.len(), "tl rejected input, repairing with html5ever");
    let repaired = repair_with_html5ever(html)
        .ok_or_else(|| ConversionError::ParseError("Failed to repair HTML".to_string()))?;
    let repaired = preprocess_entities(&repaired);
    let dom = tl::parse(&repaired, parser_options)
        .map_err(|_| ConversionError::ParseError("Failed to parse repaired HTML".to_string()))?;
    Ok(collect_nodes(dom.children().iter(), dom.parser()))
}

fn collect_nodes<'a>(handles: impl Iterator<Item = &'a tl::NodeHandle>, parser: &tl::Parser<'_>) -> Vec<HtmlNode> {
    let mut nodes = Vec::new();
    for handle in handles {
        match handle.get(parser) {
            Some(tl::Node::Tag(tag)) => {
                let attributes = tag
                    .attributes()
                    .iter()
                    .map(|(key, value)| {
                        (
                            key.to_ascii_lowercase(),
                            value.map(Cow::into_owned).unwrap_or_default(),
                        )
                    })
                    .collect();
                let children = tag.children();
                nodes.push(HtmlNode::Element(HtmlElement {
                    name: tag.name().as_utf8_str().to_ascii_lowercase(),
                    attributes,
                    children: collect_nodes(children.top().iter(), parser),
                }));
            }
            Some(tl::Node::Raw(bytes)) => nodes.push(HtmlNode::Text(bytes.as_utf8_str().into_owned())),
            Some(tl::Node::Comment(_)) | None => {}
        }
    }
    nodes
}

/// Re-serialize the `<body>` content of `input` as parsed by html5ever.
fn repair_with_html5ever(input: &str) -> Option<String> {
    use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
    use html5ever::tendril::TendrilSink;
    use markup5ever_rcdom::{RcDom, SerializableHandle};

    let dom = html5ever::parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input.as_bytes())
        .ok()?;
    let body = find_element(&dom.document, "body")?;

    let mut buf = Vec::with_capacity(input.len());
    let handle = SerializableHandle::from(body);
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut buf, &handle, opts).ok()?;
    String::from_utf8(buf).ok()
}

fn find_element(handle: &markup5ever_rcdom::Handle, name: &str) -> Option<markup5ever_rcdom::Handle> {
    if let markup5ever_rcdom::NodeData::Element { name: qual_name, .. } = &handle.data {
        if &*qual_name.local == name {
            return Some(handle.clone());
        }
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, name))
}
