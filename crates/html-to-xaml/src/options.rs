//! Configuration options for HTML to XAML conversion.

/// Default colour of the hyperlink foreground brush.
pub const DEFAULT_LINK_FOREGROUND: &str = "#FF1BA1E2";

/// Main conversion options.
///
/// The image limits and link colour feed the two resources declared on the
/// root `RichTextBlock`; everything else controls the final serialization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ConversionOptions {
    /// Re-render the assembled markup canonically (indented, well-formed).
    ///
    /// When the assembled markup does not parse, the raw buffer is returned instead.
    pub format_output: bool,

    /// `MaxWidth` setter of the `ViewboxImageStyle` resource.
    pub image_max_width: u32,

    /// `MaxHeight` setter of the `ViewboxImageStyle` resource.
    pub image_max_height: u32,

    /// Colour of the `AppForegroundColor` brush used by hyperlinks.
    pub link_foreground: String,

    /// Spaces per nesting level in the canonical re-render.
    pub indent_width: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            format_output: true,
            image_max_width: 300,
            image_max_height: 200,
            link_foreground: DEFAULT_LINK_FOREGROUND.to_string(),
            indent_width: 2,
        }
    }
}

impl ConversionOptions {
    /// Enable or disable the canonical re-render pass.
    #[must_use]
    pub const fn with_format_output(mut self, format_output: bool) -> Self {
        self.format_output = format_output;
        self
    }

    /// Set the maximum rendered image size (width, height).
    #[must_use]
    pub const fn with_image_bounds(mut self, max_width: u32, max_height: u32) -> Self {
        self.image_max_width = max_width;
        self.image_max_height = max_height;
        self
    }

    /// Set the hyperlink foreground colour.
    #[must_use]
    pub fn with_link_foreground(mut self, color: impl Into<String>) -> Self {
        self.link_foreground = color.into();
        self
    }

    /// Set the indentation width of the canonical re-render.
    #[must_use]
    pub const fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_viewbox_style() {
        let options = ConversionOptions::default();
        assert!(options.format_output);
        assert_eq!(options.image_max_width, 300);
        assert_eq!(options.image_max_height, 200);
        assert_eq!(options.link_foreground, DEFAULT_LINK_FOREGROUND);
        assert_eq!(options.indent_width, 2);
    }

    #[test]
    fn test_builder_setters() {
        let options = ConversionOptions::default()
            .with_format_output(false)
            .with_image_bounds(640, 480)
            .with_link_foreground("Red")
            .with_indent_width(4);
        assert!(!options.format_output);
        assert_eq!((options.image_max_width, options.image_max_height), (640, 480));
        assert_eq!(options.link_foreground, "Red");
        assert_eq!(options.indent_width, 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let options: ConversionOptions = serde_json::from_str(r#"{"imageMaxWidth": 120}"#).unwrap();
        assert_eq!(options.image_max_width, 120);
        assert_eq!(options.image_max_height, 200);
        assert!(options.format_output);
    }
}
