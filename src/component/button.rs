//! `<button>` element.

use std::fmt;

use super::Attributes;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    attributes: Attributes,
    content: Option<String>,
}

impl Button {
    /// `content` is inserted as-is and must already be valid HTML.
    pub fn new(attributes: Attributes, content: Option<String>) -> Self {
        Self {
            attributes,
            content,
        }
    }

    /// Icon-only close button labelled for assistive technology.
    pub fn close(label: &str) -> Self {
        Self::new(
            Attributes::new()
                .with_class("icon close")
                .with("aria-label", label),
            None,
        )
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn to_html(&self) -> String {
        let content = self.content.as_deref().unwrap_or_default();
        if self.attributes.is_empty() {
            format!("<button>{content}</button>")
        } else {
            format!("<button {}>{content}</button>", self.attributes.to_html())
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_button() {
        assert_eq!(
            Button::close("Dismiss").to_html(),
            r#"<button class="icon close" aria-label="Dismiss"></button>"#
        );
    }

    #[test]
    fn test_plain_button() {
        let button = Button::new(Attributes::new(), Some("<b>Go</b>".to_string()));
        assert_eq!(button.to_string(), "<button><b>Go</b></button>");
    }
}
