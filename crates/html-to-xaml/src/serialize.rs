//! Well-formedness check and canonical re-rendering of assembled XAML.

use crate::error::Result;

/// Parse `xaml` as XML and render it back canonically.
///
/// Elements that only contain elements are indented by `indent_width` spaces per
/// level; elements with any text child keep their content on one line so mixed
/// content is not altered. Empty elements are written as `<Name />`.
///
/// # Errors
///
/// Returns [`crate::ConversionError::Serialization`] when `xaml` is not well-formed.
pub fn format_xaml(xaml: &str, indent_width: usize) -> Result<String> {
    let document = roxmltree::Document::parse(xaml)?;
    let mut writer = XamlWriter {
        out: String::with_capacity(xaml.len() + xaml.len() / 2),
        indent_unit: " ".repeat(indent_width),
    };
    writer.write_element(document.root_element(), 0, false);
    Ok(writer.out)
}

/// Best-effort variant of [`format_xaml`]: malformed input is returned unchanged.
#[must_use]
pub fn normalize(xaml: &str, indent_width: usize) -> String {
    match format_xaml(xaml, indent_width) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!(error = %err, "assembled XAML is not well-formed, returning it unformatted");
            xaml.to_string()
        }
    }
}

struct XamlWriter {
    out: String,
    indent_unit: String,
}

impl XamlWriter {
    fn write_element(&mut self, node: roxmltree::Node<'_, '_>, depth: usize, inline: bool) {
        self.out.push('<');
        self.write_qualified_name(node, node.tag_name().namespace(), node.tag_name().name());

        let is_root = node.parent().is_some_and(|parent| parent.is_root());
        if is_root {
            for namespace in node.namespaces() {
                match namespace.name() {
                    Some("xml") => continue,
                    Some(prefix) => {
                        self.out.push_str(" xmlns:");
                        self.out.push_str(prefix);
                    }
                    None => self.out.push_str(" xmlns"),
                }
                self.out.push_str("=\"");
                push_escaped_attr(&mut self.out, namespace.uri());
                self.out.push('"');
            }
        }

        for attr in node.attributes() {
            self.out.push(' ');
            self.write_qualified_name(node, attr.namespace(), attr.name());
            self.out.push_str("=\"");
            push_escaped_attr(&mut self.out, attr.value());
            self.out.push('"');
        }

        let children: Vec<roxmltree::Node<'_, '_>> = node
            .children()
            .filter(|child| child.is_element() || child.is_text())
            .collect();
        if children.is_empty() {
            self.out.push_str(" />");
            return;
        }
        self.out.push('>');

        let mixed = inline || children.iter().any(roxmltree::Node::is_text);
        for child in &children {
            if child.is_text() {
                push_escaped_text(&mut self.out, child.text().unwrap_or_default());
            } else if mixed {
                self.write_element(*child, depth + 1, true);
            } else {
                self.newline(depth + 1);
                self.write_element(*child, depth + 1, false);
            }
        }
        if !mixed {
            self.newline(depth);
        }

        self.out.push_str("</");
        self.write_qualified_name(node, node.tag_name().namespace(), node.tag_name().name());
        self.out.push('>');
    }

    fn write_qualified_name(&mut self, scope: roxmltree::Node<'_, '_>, namespace: Option<&str>, local: &str) {
        if let Some(prefix) = namespace.and_then(|uri| scope.lookup_prefix(uri)) {
            self.out.push_str(prefix);
            self.out.push(':');
        }
        self.out.push_str(local);
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(&self.indent_unit);
        }
    }
}

fn push_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn push_escaped_attr(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            '\t' => out.push_str("&#x9;"),
            _ => out.push(ch),
        }
    }
}
