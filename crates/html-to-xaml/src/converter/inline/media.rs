//! Images, rendered through the scaled `Viewbox` style declared on the root container.

use crate::dom::HtmlElement;
use crate::text::escape_url;

/// Append a `Viewbox`-scaled `Image` whose source is `src` without its query string.
pub(crate) fn push_viewbox_image(src: &str, output: &mut String) {
    output.push_str(r#"<Viewbox Style="{StaticResource ViewboxImageStyle}">"#);
    output.push_str(&format!(r#"<Image Source="{}"/>"#, escape_url(src)));
    output.push_str("</Viewbox>");
}

/// An `img` with a `src` attribute (even an empty one) becomes an inline image;
/// without `src` it produces nothing.
pub(crate) fn push_image(element: &HtmlElement, output: &mut String) {
    let Some(src) = element.attr("src") else {
        return;
    };
    output.push_str("<InlineUIContainer>");
    push_viewbox_image(src, output);
    output.push_str("</InlineUIContainer>");
}

#[cfg(test)]
mod tests {
    use crate::converter::test_utils::render;

    #[test]
    fn test_image_query_string_is_stripped() {
        assert_eq!(
            render(r#"<img src="http://x/y.png?token=abc">"#, false),
            r#"<InlineUIContainer><Viewbox Style="{StaticResource ViewboxImageStyle}"><Image Source="http://x/y.png"/></Viewbox></InlineUIContainer>"#
        );
    }

    #[test]
    fn test_image_without_src_is_dropped() {
        assert_eq!(render(r#"<img alt="missing">"#, false), "");
        assert_eq!(render("<img>", true), r#"<Paragraph LineStackingStrategy="MaxHeight"></Paragraph>"#);
    }

    #[test]
    fn test_image_with_empty_src_is_kept() {
        assert!(render(r#"<img src="">"#, false).contains(r#"<Image Source=""/>"#));
    }

    #[test]
    fn test_image_source_is_escaped() {
        assert!(render(r#"<img src="http://x/a&b.png">"#, false).contains(r#"<Image Source="http://x/a&amp;b.png"/>"#));
    }
}
