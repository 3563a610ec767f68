//! Anchor elements.

use crate::converter::inline::media::push_viewbox_image;
use crate::converter::main::process_children;
use crate::dom::HtmlElement;
use crate::text::escape_url;

/// Convert an `a` element.
///
/// Without a non-empty `href` nothing is emitted. An anchor containing an image
/// becomes a clickable image: the button navigates to the anchor's `href` while the
/// picture comes from the first nested `img`'s `src`. Otherwise an anchor with text
/// becomes a bold, underlined `Hyperlink` over its text descendants only.
pub(crate) fn push_anchor(element: &HtmlElement, output: &mut String) {
    let Some(href) = element.attr("href").filter(|href| !href.is_empty()) else {
        return;
    };

    if let Some(image) = element.descendant_elements("img").next() {
        output.push_str(&format!(
            r#"<InlineUIContainer><HyperlinkButton NavigateUri="{}">"#,
            escape_url(href)
        ));
        push_viewbox_image(image.attr("src").unwrap_or_default(), output);
        output.push_str("</HyperlinkButton></InlineUIContainer>");
    } else if element.text_descendants().next().is_some() {
        output.push_str(&format!(
            r#"<Hyperlink NavigateUri="{}" FontWeight="Bold" Foreground="{{StaticResource AppForegroundColor}}">"#,
            escape_url(href)
        ));
        output.push_str("<Underline>");
        process_children(element.text_descendants(), false, output);
        output.push_str("</Underline></Hyperlink>");
    }
}

#[cfg(test)]
mod tests {
    use crate::converter::test_utils::render;

    #[test]
    fn test_text_anchor_is_styled_hyperlink() {
        assert_eq!(
            render(r#"<a href="http://example.com/page?ref=feed">Read <b>more</b></a>"#, false),
            concat!(
                r#"<Hyperlink NavigateUri="http://example.com/page" FontWeight="Bold" Foreground="{StaticResource AppForegroundColor}">"#,
                "<Underline>Read more</Underline></Hyperlink>"
            )
        );
    }

    #[test]
    fn test_image_anchor_uses_href_for_link_and_src_for_image() {
        assert_eq!(
            render(r#"<a href="http://x/full.jpg"><img src="http://x/thumb.jpg?s=1"></a>"#, false),
            concat!(
                r#"<InlineUIContainer><HyperlinkButton NavigateUri="http://x/full.jpg">"#,
                r#"<Viewbox Style="{StaticResource ViewboxImageStyle}"><Image Source="http://x/thumb.jpg"/></Viewbox>"#,
                "</HyperlinkButton></InlineUIContainer>"
            )
        );
    }

    #[test]
    fn test_image_wins_over_text() {
        let output = render(r#"<a href="http://x/">caption <span><img src="i.png"></span></a>"#, false);
        assert!(output.contains("HyperlinkButton"));
        assert!(!output.contains("caption"));
    }

    #[test]
    fn test_anchor_without_content_is_dropped() {
        assert_eq!(render(r#"<a href="http://x/"></a>"#, false), "");
        assert_eq!(render(r#"<a href="http://x/"><span></span></a>"#, false), "");
    }

    #[test]
    fn test_anchor_without_href_is_dropped() {
        assert_eq!(render("<a>text</a>", false), "");
        assert_eq!(render(r#"<a name="top"><img src="i.png"></a>"#, false), "");
        assert_eq!(render(r#"<a href="">text</a>"#, false), "");
    }
}
