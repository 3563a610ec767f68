//! Heading elements (`h1`..`h6`).

use crate::converter::main::{LINE_BREAK, process_children};
use crate::dom::HtmlElement;

/// Font sizes in points for `h1`..`h6`.
const HEADING_FONT_SIZES: [u32; 6] = [36, 33, 29, 26, 24, 22];

pub(crate) fn heading_font_size(level: u8) -> u32 {
    let index = usize::from(level.clamp(1, 6) - 1);
    HEADING_FONT_SIZES[index]
}

/// A root heading is a sized paragraph over all children. A nested heading is a sized
/// `Run` between line breaks holding only the heading's text, since a `Run` cannot
/// contain other inlines.
pub(crate) fn push_heading(element: &HtmlElement, level: u8, is_root: bool, output: &mut String) {
    let font_size = heading_font_size(level);
    if is_root {
        output.push_str(&format!(
            r#"<Paragraph LineStackingStrategy="MaxHeight" FontSize="{font_size}">"#
        ));
        process_children(&element.children, false, output);
        output.push_str("</Paragraph>");
    } else {
        output.push_str(LINE_BREAK);
        output.push_str(&format!(r#"<Run FontSize="{font_size}">"#));
        process_children(element.text_descendants(), false, output);
        output.push_str("</Run>");
        output.push_str(LINE_BREAK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::test_utils::render;

    #[test]
    fn test_font_sizes() {
        let sizes: Vec<u32> = (1..=6).map(heading_font_size).collect();
        assert_eq!(sizes, vec![36, 33, 29, 26, 24, 22]);
    }

    #[test]
    fn test_root_heading_is_sized_paragraph() {
        assert_eq!(
            render("<h1>Title <i>here</i></h1>", true),
            r#"<Paragraph LineStackingStrategy="MaxHeight" FontSize="36">Title <Italic>here</Italic></Paragraph>"#
        );
    }

    #[test]
    fn test_nested_heading_keeps_only_text() {
        assert_eq!(
            render("<h3>Sub <b>title</b></h3>", false),
            r#"<LineBreak/><Run FontSize="29">Sub title</Run><LineBreak/>"#
        );
    }

    #[test]
    fn test_heading_inside_div_at_root() {
        assert_eq!(
            render("<div><h6>small</h6></div>", true),
            r#"<Paragraph LineStackingStrategy="MaxHeight"><Span><LineBreak/><Run FontSize="22">small</Run><LineBreak/></Span></Paragraph>"#
        );
    }
}
