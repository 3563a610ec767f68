//! Inline handlers: emphasis, underline, line breaks, links and images.

pub(crate) mod link;
pub(crate) mod media;

use crate::converter::main::{LINE_BREAK, process_children};
use crate::dom::HtmlElement;

fn push_wrapped(element: &HtmlElement, open: &str, close: &str, output: &mut String) {
    output.push_str(open);
    process_children(&element.children, false, output);
    output.push_str(close);
}

/// `b`, `strong` and `em`.
pub(crate) fn push_bold(element: &HtmlElement, output: &mut String) {
    push_wrapped(element, "<Bold>", "</Bold>", output);
}

pub(crate) fn push_italic(element: &HtmlElement, output: &mut String) {
    push_wrapped(element, "<Italic>", "</Italic>", output);
}

pub(crate) fn push_underline(element: &HtmlElement, output: &mut String) {
    push_wrapped(element, "<Underline>", "</Underline>", output);
}

/// `br` never has children.
pub(crate) fn push_line_break(output: &mut String) {
    output.push_str(LINE_BREAK);
}
