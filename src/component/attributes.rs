//! HTML attributes of a component's root element.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::utils::html::escape_attr;

/// Ordered attribute map with a separate class list.
///
/// `class` is always emitted first, followed by the other attributes in
/// insertion order. A value of `None` emits a bare boolean attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    classes: IndexSet<String>,
    values: IndexMap<String, Option<String>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Set an attribute. `class` values are merged into the class list.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if name.eq_ignore_ascii_case("class") {
            self.add_class(&value);
        } else {
            self.values.insert(name.to_string(), Some(value));
        }
        self
    }

    pub fn set_flag(&mut self, name: &str) -> &mut Self {
        self.values.insert(name.to_string(), None);
        self
    }

    /// Add whitespace-separated classes, skipping duplicates.
    pub fn add_class(&mut self, classes: &str) -> &mut Self {
        for class in classes.split_whitespace() {
            self.classes.insert(class.to_string());
        }
        self
    }

    pub fn remove_class(&mut self, class: &str) -> bool {
        self.classes.shift_remove(class)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }

    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.values.is_empty()
    }

    /// `class="a b" name="value" flag`, escaped for a double-quoted context.
    pub fn to_html(&self) -> String {
        let mut parts = Vec::with_capacity(self.values.len() + 1);
        if !self.classes.is_empty() {
            let classes: Vec<&str> = self.class_list().collect();
            parts.push(format!("class=\"{}\"", escape_attr(&classes.join(" "))));
        }
        for (name, value) in &self.values {
            match value {
                Some(value) => parts.push(format!("{}=\"{}\"", name, escape_attr(value))),
                None => parts.push(name.clone()),
            }
        }
        parts.join(" ")
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name.as_ref(), value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_first_then_insertion_order() {
        let attrs = Attributes::new()
            .with("role", "status")
            .with_class("notification")
            .with("aria-live", "polite")
            .with_class("info notification");
        assert_eq!(
            attrs.to_html(),
            r#"class="notification info" role="status" aria-live="polite""#
        );
    }

    #[test]
    fn test_values_escaped() {
        let attrs = Attributes::new().with("title", r#"say "hi" <now>"#);
        assert_eq!(attrs.to_html(), r#"title="say &quot;hi&quot; &lt;now&gt;""#);
    }

    #[test]
    fn test_flags_and_class_removal() {
        let mut attrs: Attributes = [("class", "a b")].into_iter().collect();
        attrs.set_flag("hidden");
        assert!(attrs.remove_class("a"));
        assert!(!attrs.remove_class("missing"));
        assert_eq!(attrs.to_html(), r#"class="b" hidden"#);
    }

    #[test]
    fn test_empty() {
        let attrs = Attributes::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.to_html(), "");
        assert_eq!(attrs.get("id"), None);
    }
}
