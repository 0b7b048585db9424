//! Notification (toast) component.
//!
//! A notification carries a kind, a message, an optional description and
//! timeout, and one timestamp per occurrence. Repeating the same
//! notification before it is rendered calls [`Notification::bump`] instead
//! of creating a new one, so the template can show a counter.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::{Attributes, Button, Component};
use crate::config::{BUNDLED_COMPONENTS, BUNDLED_TEMPLATES};
use crate::error::ComponentError;
use crate::registry::normalize_key;
use crate::utils::date::{Timestamp, TimestampFormat};
use crate::utils::hash;

/// Seconds within which an occurrence reads as "Now".
const NOW_WINDOW: i64 = 5;
/// Seconds within which an occurrence reads as "Today".
const TODAY_WINDOW: i64 = 43_200;

// ============================================================================
// NotificationKind
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Danger,
    Error,
    #[default]
    Notice,
}

impl NotificationKind {
    pub const ALL: [Self; 6] = [
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Error,
        Self::Notice,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Error => "error",
            Self::Notice => "notice",
        }
    }

    /// Inline SVG icon. Kinds without their own icon use the notice icon.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => icons::SUCCESS,
            Self::Info => icons::INFO,
            Self::Danger => icons::DANGER,
            Self::Warning => icons::WARNING,
            Self::Error | Self::Notice => icons::NOTICE,
        }
    }
}

impl FromStr for NotificationKind {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == key)
            .ok_or_else(|| ComponentError::invalid("notification", "kind", s))
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Notification
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
    description: Option<String>,
    timeout: Option<u32>,
    instances: Vec<Timestamp>,
    attributes: Attributes,
}

impl Notification {
    /// Create a notification from a kind name.
    ///
    /// Fails with [`ComponentError::InvalidValue`] for unknown kinds.
    pub fn new(kind: &str, message: &str) -> Result<Self, ComponentError> {
        Ok(Self::with_kind(kind.parse()?, message))
    }

    pub fn with_kind(kind: NotificationKind, message: &str) -> Self {
        Self {
            kind,
            message: message.trim().to_string(),
            description: None,
            timeout: None,
            instances: vec![Timestamp::now()],
            attributes: Attributes::new()
                .with_class("notification")
                .with_class(kind.as_str()),
        }
    }

    /// Additional details shown below the message. Blank text clears it.
    pub fn with_description(mut self, description: &str) -> Self {
        let description = description.trim();
        self.description = (!description.is_empty()).then(|| description.to_string());
        self
    }

    /// Milliseconds before the notification is dismissed.
    ///
    /// `Some(0)` requires manual dismissal, `None` defers to the front-end default.
    pub fn with_timeout(mut self, milliseconds: Option<u32>) -> Self {
        self.timeout = milliseconds;
        self
    }

    pub fn set_timeout(&mut self, milliseconds: Option<u32>) -> &mut Self {
        self.timeout = milliseconds;
        self
    }

    // ------------------------------------------------------------------------
    // Kind
    // ------------------------------------------------------------------------

    pub fn set_kind(&mut self, kind: NotificationKind) -> &mut Self {
        self.attributes.remove_class(self.kind.as_str());
        self.attributes.add_class(kind.as_str());
        self.kind = kind;
        self
    }

    pub fn info(&mut self) -> &mut Self {
        self.set_kind(NotificationKind::Info)
    }

    pub fn success(&mut self) -> &mut Self {
        self.set_kind(NotificationKind::Success)
    }

    pub fn warning(&mut self) -> &mut Self {
        self.set_kind(NotificationKind::Warning)
    }

    pub fn danger(&mut self) -> &mut Self {
        self.set_kind(NotificationKind::Danger)
    }

    pub fn error(&mut self) -> &mut Self {
        self.set_kind(NotificationKind::Error)
    }

    pub fn notice(&mut self) -> &mut Self {
        self.set_kind(NotificationKind::Notice)
    }

    // ------------------------------------------------------------------------
    // Occurrences
    // ------------------------------------------------------------------------

    /// Record another occurrence of this notification.
    pub fn bump(&mut self) -> &mut Self {
        self.instances.push(Timestamp::now());
        self
    }

    #[cfg(test)]
    fn bump_at(&mut self, at: Timestamp) -> &mut Self {
        self.instances.push(at);
        self
    }

    /// Occurrences since creation.
    pub fn count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[Timestamp] {
        &self.instances
    }

    /// Most recent occurrence.
    pub fn latest(&self) -> Timestamp {
        self.instances.last().copied().unwrap_or_else(Timestamp::now)
    }

    pub fn timestamp(&self, format: TimestampFormat) -> String {
        self.latest().format(format)
    }

    /// Relative time markup for the latest occurrence, as seen at `now`.
    pub fn when(&self, now: Timestamp) -> String {
        let latest = self.latest();
        let timestamp = latest.format(TimestampFormat::Human);
        let elapsed = now.unix() - latest.unix();

        let label = if elapsed < NOW_WINDOW {
            "Now"
        } else if elapsed < TODAY_WINDOW {
            "Today"
        } else {
            return timestamp;
        };
        format!(
            r#"<span class="datetime-when">{label}</span><span class="datetime-timestamp">{timestamp}</span>"#
        )
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn timeout(&self) -> Option<u32> {
        self.timeout
    }

    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }

    /// Identity of the notification's content, ignoring occurrences.
    ///
    /// Equal keys mean a new notification should bump an existing one.
    pub fn key(&self) -> String {
        let timeout = self.timeout.map(|t| t.to_string()).unwrap_or_default();
        hash::fingerprint(&format!(
            "{}\0{}\0{}\0{}",
            self.kind,
            self.message,
            self.description.as_deref().unwrap_or_default(),
            timeout
        ))
    }
}

/// Template view of a notification.
#[derive(Serialize)]
struct View<'a> {
    key: String,
    kind: NotificationKind,
    icon: &'static str,
    message: &'a str,
    description: Option<&'a str>,
    timeout: Option<u32>,
    count: usize,
    instances: &'a [Timestamp],
    timestamp: String,
    unix_timestamp: i64,
    when: String,
    close: String,
}

impl Serialize for Notification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        View {
            key: self.key(),
            kind: self.kind,
            icon: self.icon(),
            message: &self.message,
            description: self.description(),
            timeout: self.timeout,
            count: self.count(),
            instances: &self.instances,
            timestamp: self.timestamp(TimestampFormat::Rfc3339),
            unix_timestamp: self.latest().unix(),
            when: self.when(Timestamp::now()),
            close: Button::close("Close").to_html(),
        }
        .serialize(serializer)
    }
}

impl Component for Notification {
    const TYPE: &'static str = "notification";

    fn declared_assets() -> Vec<PathBuf> {
        let dir = Path::new(BUNDLED_COMPONENTS);
        vec![dir.join("notification.css"), dir.join("notification.js")]
    }

    fn template_path(&self) -> PathBuf {
        Path::new(BUNDLED_TEMPLATES).join("notification.html")
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

mod icons {
    pub const SUCCESS: &str = r#"<svg class="icon" fill="currentColor" viewbox="0 0 16 16"><path d="M16 8A8 8 0 1 1 0 8a8 8 0 0 1 16 0zm-3.97-3.03a.75.75 0 0 0-1.08.022L7.477 9.417 5.384 7.323a.75.75 0 0 0-1.06 1.06L6.97 11.03a.75.75 0 0 0 1.079-.02l3.992-4.99a.75.75 0 0 0-.01-1.05z"/></svg>"#;
    pub const INFO: &str = r#"<svg class="icon" fill="currentColor" viewbox="0 0 16 16"><path d="M8 16A8 8 0 1 0 8 0a8 8 0 0 0 0 16zm.93-9.412-1 4.705c-.07.34.029.533.304.533.194 0 .487-.07.686-.246l-.088.416c-.287.346-.92.598-1.465.598-.703 0-1.002-.422-.808-1.319l.738-3.468c.064-.293.006-.399-.287-.47l-.451-.081.082-.381 2.29-.287zM8 5.5a1 1 0 1 1 0-2 1 1 0 0 1 0 2z"/></svg>"#;
    pub const DANGER: &str = r#"<svg class="icon" fill="currentColor" viewbox="0 0 16 16"><path d="M16 8A8 8 0 1 1 0 8a8 8 0 0 1 16 0zM5.354 4.646a.5.5 0 1 0-.708.708L7.293 8l-2.647 2.646a.5.5 0 0 0 .708.708L8 8.707l2.646 2.647a.5.5 0 0 0 .708-.708L8.707 8l2.647-2.646a.5.5 0 0 0-.708-.708L8 7.293 5.354 4.646z"/></svg>"#;
    pub const WARNING: &str = r#"<svg class="icon" fill="none" viewbox="0 0 16 16"><path fill="currentColor" fill-rule="evenodd" clip-rule="evenodd" d="M9.336.757c-.594-1.01-2.078-1.01-2.672 0L.21 11.73C-.385 12.739.357 14 1.545 14h12.91c1.188 0 1.93-1.261 1.336-2.27L9.336.757ZM9 4.5C9 4 9 4 8 4s-1 0-1 .5l.383 3.538c.103.505.103.505.617.505s.514 0 .617-.505L9 4.5Zm-1 7.482c1.028 0 1.028 0 1.028-1.01 0-1.009 0-1.009-1.028-1.009s-1.028.094-1.028 1.01c0 1.008 0 1.008 1.028 1.008Z"/></svg>"#;
    pub const NOTICE: &str = r#"<svg class="icon" fill="none" viewbox="0 0 16 16"><path fill="currentColor" fill-rule="evenodd" clip-rule="evenodd" d="M6.983 1.006a.776.776 0 0 1 .667.634l1.781 9.967 1.754-3.925a.774.774 0 0 1 .706-.46h3.335c.427 0 .774.348.774.778 0 .43-.347.778-.774.778h-2.834L9.818 14.54a.774.774 0 0 1-1.468-.181L6.569 4.393 4.816 8.318a.774.774 0 0 1-.707.46H.774A.776.776 0 0 1 0 8c0-.43.347-.778.774-.778h2.834L6.182 1.46a.774.774 0 0 1 .8-.453Z"/></svg>"#;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderContext;
    use crate::template::TeraEngine;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Success".parse::<NotificationKind>().unwrap(), NotificationKind::Success);
        assert_eq!(" danger ".parse::<NotificationKind>().unwrap(), NotificationKind::Danger);

        let err = Notification::new("shout", "Hi").unwrap_err();
        assert!(matches!(
            err,
            ComponentError::InvalidValue { field: "kind", ref value, .. } if value == "shout"
        ));
    }

    #[test]
    fn test_message_trimmed_and_classes() {
        let n = Notification::new("info", "  Saved  ")
            .unwrap()
            .with_description("   ");
        assert_eq!(n.message(), "Saved");
        assert_eq!(n.description(), None);
        assert_eq!(n.attributes().to_html(), r#"class="notification info""#);
    }

    #[test]
    fn test_kind_setters_update_classes() {
        let mut n = Notification::with_kind(NotificationKind::Info, "x");
        n.warning();
        assert_eq!(n.kind(), NotificationKind::Warning);
        assert_eq!(n.attributes().to_html(), r#"class="notification warning""#);
    }

    #[test]
    fn test_icon_fallback() {
        assert_eq!(NotificationKind::Error.icon(), NotificationKind::Notice.icon());
        assert_ne!(NotificationKind::Success.icon(), NotificationKind::Notice.icon());
    }

    #[test]
    fn test_key_ignores_occurrences() {
        let mut a = Notification::with_kind(NotificationKind::Info, "Saved");
        let b = Notification::with_kind(NotificationKind::Info, "Saved");
        a.bump();
        assert_eq!(a.count(), 2);
        assert_eq!(a.key(), b.key());

        let c = b.clone().with_timeout(Some(4000));
        assert_ne!(c.key(), a.key());
        assert_eq!(c.timeout(), Some(4000));
    }

    #[test]
    fn test_when() {
        let base = Timestamp::from_unix(1_718_461_845);
        let mut n = Notification::with_kind(NotificationKind::Info, "x");
        n.bump_at(base);

        assert!(n.when(Timestamp::from_unix(1_718_461_847)).contains(">Now<"));
        assert!(n.when(Timestamp::from_unix(1_718_461_845 + 3600)).contains(">Today<"));
        assert_eq!(
            n.when(Timestamp::from_unix(1_718_461_845 + 86_400)),
            "15 Jun 2024, 14:30"
        );
        assert_eq!(n.timestamp(TimestampFormat::Rfc3339), "2024-06-15T14:30:45Z");
    }

    #[test]
    fn test_render_bundled_template() {
        let mut ctx = RenderContext::with_directories(Vec::<PathBuf>::new()).unwrap();
        let n = Notification::new("success", "Saved <draft>")
            .unwrap()
            .with_description("All changes stored");

        let html = n.render(&mut ctx, &TeraEngine::new()).unwrap();
        assert!(html.contains(r#"class="notification success""#));
        assert!(html.contains("Saved &lt;draft&gt;"));
        assert!(html.contains("All changes stored"));
        assert!(html.contains(NotificationKind::Success.icon()));
        assert!(html.contains(r#"aria-label="Close""#));

        // No search directory: the declared bundled files are used
        let assets = ctx.enqueued_assets().unwrap();
        let names: Vec<_> = assets
            .values()
            .map(|a| a.path().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["notification.css", "notification.js"]);
    }
}
