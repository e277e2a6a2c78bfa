//! Transient, user-visible notifications.

use serde::Serialize;

/// Style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    /// Informational.
    Default,
    /// Failure.
    Destructive,
}

impl NotificationVariant {
    /// CSS modifier used by the page shell.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Default => "toast--default",
            Self::Destructive => "toast--destructive",
        }
    }
}

/// A toast shown once and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Short heading.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Visual style.
    pub variant: NotificationVariant,
}

impl Notification {
    /// Informational notification.
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// Failure notification.
    #[must_use]
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}
