//! SSE events for the browser guide widget.
//!
//! Each [`GuideView`] callback becomes one [`GuideEvent`], written to the wire
//! as `event: <name>\ndata: <json>\n\n`.
//!
//! # Example
//!
//! ```rust
//! use museum_site::guide::events::{GuideEvent, sse_event};
//!
//! let sse = sse_event(&GuideEvent::Streaming { text: "Hel".to_string() });
//! assert!(sse.starts_with("event: message.streaming\n"));
//! ```

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use super::{ChatMessage, GuideView, IgnoreReason, Notification};
use crate::llm::Role;

/// Streaming events emitted while a guide turn runs.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum GuideEvent {
    /// Conversation the turn belongs to. Always the first event.
    #[serde(rename = "session")]
    Session {
        /// Conversation ID to send back on the next turn.
        session_id: String,
    },
    /// The widget should empty its input box.
    #[serde(rename = "input.cleared")]
    InputCleared,
    /// A visitor message joined the conversation.
    #[serde(rename = "message.user")]
    UserMessage {
        /// Message text.
        text: String,
    },
    /// Accumulated answer text so far.
    #[serde(rename = "message.streaming")]
    Streaming {
        /// Full text received so far.
        text: String,
    },
    /// The answer was committed.
    #[serde(rename = "message.committed")]
    Committed {
        /// Raw answer text.
        text: String,
        /// Answer rendered from markdown, raw HTML removed.
        html: String,
    },
    /// The pending visitor message was rolled back.
    #[serde(rename = "message.aborted")]
    Aborted {
        /// Text of the rolled-back message, so the widget can restore the draft.
        text: String,
    },
    /// Transient notification.
    #[serde(rename = "notification")]
    Notification(Notification),
    /// The send was ignored.
    #[serde(rename = "ignored")]
    Ignored {
        /// Why nothing happened.
        reason: IgnoreReason,
    },
    /// End of stream.
    #[serde(rename = "done")]
    Done,
}

/// Format a [`GuideEvent`] as an SSE frame.
pub fn sse_event(evt: &GuideEvent) -> String {
    let json = serde_json::to_string(evt).unwrap_or_else(|e| {
        serde_json::json!({ "type": "error", "data": { "message": e.to_string() } }).to_string()
    });

    let event_name = event_name(evt);

    format!("event: {event_name}\ndata: {json}\n\n")
}

/// Get the SSE event name for a [`GuideEvent`].
pub fn event_name(evt: &GuideEvent) -> &'static str {
    match evt {
        GuideEvent::Session { .. } => "session",
        GuideEvent::InputCleared => "input.cleared",
        GuideEvent::UserMessage { .. } => "message.user",
        GuideEvent::Streaming { .. } => "message.streaming",
        GuideEvent::Committed { .. } => "message.committed",
        GuideEvent::Aborted { .. } => "message.aborted",
        GuideEvent::Notification(_) => "notification",
        GuideEvent::Ignored { .. } => "ignored",
        GuideEvent::Done => "done",
    }
}

/// Link and image schemes kept in rendered answers.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether `url` is a web, mail or relative destination.
///
/// Browsers ignore ASCII whitespace and control characters inside a scheme,
/// so those are removed before looking for one.
fn is_safe_destination(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();
    let end = cleaned
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(cleaned.len());
    match cleaned[..end].split_once(':') {
        None => true,
        Some((scheme, _)) => ALLOWED_SCHEMES
            .iter()
            .any(|allowed| scheme.eq_ignore_ascii_case(allowed)),
    }
}

fn safe_destination(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_destination(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Render a model answer from markdown.
///
/// Raw HTML in the answer is dropped and link or image destinations with a
/// scheme other than http, https or mailto become `#`.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        })),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Some(Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        })),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// [`GuideView`] that forwards every callback as a [`GuideEvent`] on a channel.
///
/// A closed receiver (the browser went away) is not an error: the turn keeps
/// running so the conversation log still gets the answer.
#[derive(Debug, Clone)]
pub struct SseView {
    tx: UnboundedSender<GuideEvent>,
}

impl SseView {
    /// Create a view writing into `tx`.
    #[must_use]
    pub fn new(tx: UnboundedSender<GuideEvent>) -> Self {
        Self { tx }
    }

    /// Emit an event outside of the view callbacks.
    pub fn emit(&self, event: GuideEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("Guide event receiver closed");
        }
    }
}

impl GuideView for SseView {
    fn input_cleared(&mut self) {
        self.emit(GuideEvent::InputCleared);
    }

    fn user_message(&mut self, message: &ChatMessage) {
        self.emit(GuideEvent::UserMessage {
            text: message.content.clone(),
        });
    }

    fn streaming(&mut self, accumulated: &str) {
        self.emit(GuideEvent::Streaming {
            text: accumulated.to_string(),
        });
    }

    fn committed(&mut self, message: &ChatMessage) {
        self.emit(GuideEvent::Committed {
            text: message.content.clone(),
            html: render_markdown(&message.content),
        });
    }

    fn aborted(&mut self, user_message: &ChatMessage) {
        self.emit(GuideEvent::Aborted {
            text: user_message.content.clone(),
        });
    }

    fn notify(&mut self, notification: Notification) {
        self.emit(GuideEvent::Notification(notification));
    }
}

/// Message as listed by the history endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Author.
    pub role: Role,
    /// Raw text.
    pub content: String,
    /// Rendered markdown for model messages; `None` for visitor messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl From<&ChatMessage> for HistoryEntry {
    fn from(message: &ChatMessage) -> Self {
        let html = match message.role {
            Role::Model => Some(render_markdown(&message.content)),
            Role::User => None,
        };
        Self {
            role: message.role,
            content: message.content.clone(),
            html,
        }
    }
}
