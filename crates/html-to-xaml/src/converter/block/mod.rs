//! Block-level handlers: `span`/`div`, `p`, `blockquote`, headings and tables.

pub(crate) mod heading;
pub(crate) mod table;

use crate::converter::main::{EMPTY_PARAGRAPH, LINE_BREAK, PARAGRAPH_CLOSE, PARAGRAPH_OPEN, process_children};
use crate::dom::HtmlElement;

/// `span` and `div` both become a `Span` around their children.
pub(crate) fn push_span(element: &HtmlElement, output: &mut String) {
    output.push_str("<Span>");
    process_children(&element.children, false, output);
    output.push_str("</Span>");
}

/// A root `p` becomes a paragraph followed by an empty one (a blank line); a nested
/// `p` is framed by line breaks instead.
pub(crate) fn push_paragraph(element: &HtmlElement, is_root: bool, output: &mut String) {
    if is_root {
        output.push_str(PARAGRAPH_OPEN);
        process_children(&element.children, false, output);
        output.push_str(PARAGRAPH_CLOSE);
        output.push_str(EMPTY_PARAGRAPH);
    } else {
        output.push_str(LINE_BREAK);
        process_children(&element.children, false, output);
        output.push_str(LINE_BREAK);
    }
}

/// A `blockquote` hosts its children in an indented, italic nested `RichTextBlock`,
/// where they are top-level again.
pub(crate) fn push_blockquote(element: &HtmlElement, output: &mut String) {
    output.push_str(LINE_BREAK);
    output.push_str(r#"<InlineUIContainer><RichTextBlock Margin="20,0,0,0" FontStyle="Italic">"#);
    process_children(&element.children, true, output);
    output.push_str("</RichTextBlock></InlineUIContainer>");
}

#[cfg(test)]
mod tests {
    use crate::converter::test_utils::render;

    #[test]
    fn test_div_and_span_are_identical() {
        assert_eq!(render("<div>x</div>", false), "<Span>x</Span>");
        assert_eq!(render("<span>x</span>", false), "<Span>x</Span>");
    }

    #[test]
    fn test_root_div_is_wrapped() {
        assert_eq!(
            render("<div><b>x</b></div>", true),
            r#"<Paragraph LineStackingStrategy="MaxHeight"><Span><Bold>x</Bold></Span></Paragraph>"#
        );
    }

    #[test]
    fn test_root_paragraph_adds_blank_line() {
        assert_eq!(
            render("<p>Hello <b>world</b></p>", true),
            r#"<Paragraph LineStackingStrategy="MaxHeight">Hello <Bold>world</Bold></Paragraph><Paragraph/>"#
        );
    }

    #[test]
    fn test_nested_paragraph_uses_line_breaks() {
        assert_eq!(render("<p>inner</p>", false), "<LineBreak/>inner<LineBreak/>");
        assert_eq!(
            render("<div><p>inner</p></div>", false),
            "<Span><LineBreak/>inner<LineBreak/></Span>"
        );
    }

    #[test]
    fn test_blockquote_reprocesses_children_as_root() {
        assert_eq!(
            render("<blockquote>quoted <p>para</p></blockquote>", false),
            concat!(
                r#"<LineBreak/><InlineUIContainer><RichTextBlock Margin="20,0,0,0" FontStyle="Italic">"#,
                r#"<Paragraph LineStackingStrategy="MaxHeight">quoted </Paragraph>"#,
                r#"<Paragraph LineStackingStrategy="MaxHeight">para</Paragraph><Paragraph/>"#,
                "</RichTextBlock></InlineUIContainer>"
            )
        );
    }

    #[test]
    fn test_root_blockquote_is_wrapped() {
        let output = render("<blockquote>q</blockquote>", true);
        assert!(output.starts_with(r#"<Paragraph LineStackingStrategy="MaxHeight"><LineBreak/><InlineUIContainer>"#));
        assert!(output.ends_with("</RichTextBlock></InlineUIContainer></Paragraph>"));
    }
}
