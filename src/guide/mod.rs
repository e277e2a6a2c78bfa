//! Museum guide chat widget.
//!
//! The guide owns the only process-level behaviour of the site: it sends the
//! running conversation to the generation endpoint and republishes the answer
//! to the display layer as it streams in.
//!
//! # Architecture
//!
//! - [`Conversation`]: append-only message log guarded by an in-flight token
//! - [`MuseumGuide`]: runs one turn against a [`GenerationDriver`]
//! - [`GuideView`]: display layer receiving progress callbacks
//! - [`events`]: SSE rendering of view callbacks for the browser widget
//!
//! # Example
//!
//! ```rust,ignore
//! use museum_site::guide::{ConversationStore, MuseumGuide};
//!
//! let store = ConversationStore::new();
//! let conversation = store.create();
//! let outcome = guide.send(&conversation, "When are you open?", &mut view).await;
//! ```

mod conversation;
pub mod events;
pub mod prompt;

pub use conversation::{
    ChatMessage, Conversation, ConversationStore, DEFAULT_CONVERSATION_TIMEOUT, TurnGuard,
};

use std::sync::Arc;

use futures::StreamExt;
use serde::Serialize;

use crate::i18n::{Language, Translator};
pub use crate::notification::{Notification, NotificationVariant};
use crate::llm::{
    Content, FragmentDecoder, GenerationDriver, GenerationError, GenerationRequest, Role,
};

/// Display layer for a guide widget.
///
/// Callbacks arrive in order on the task running the turn.
pub trait GuideView: Send {
    /// The input box should be emptied.
    fn input_cleared(&mut self);
    /// A visitor message joined the conversation.
    fn user_message(&mut self, message: &ChatMessage);
    /// The full text accumulated so far for the in-flight answer.
    fn streaming(&mut self, accumulated: &str);
    /// The answer was committed to the conversation.
    fn committed(&mut self, message: &ChatMessage);
    /// The pending turn was rolled back; `user_message` is no longer in the log.
    fn aborted(&mut self, user_message: &ChatMessage) {
        let _ = user_message;
    }
    /// Show a transient notification.
    fn notify(&mut self, notification: Notification);
}

/// Why a send attempt was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The input was empty or whitespace.
    EmptyInput,
    /// Another turn of this conversation is still streaming.
    InFlight,
}

/// Result of one send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing happened.
    Ignored(IgnoreReason),
    /// The stream completed; `reply` is `None` when it carried no text.
    Completed {
        /// The committed model message, if any.
        reply: Option<ChatMessage>,
    },
    /// The endpoint could not be reached or rejected the request.
    Failed,
}

/// Accumulator for the in-flight answer.
#[derive(Debug, Default)]
pub struct StreamBuffer {
    text: String,
    fragments: usize,
    skipped: usize,
}

impl StreamBuffer {
    /// Append a fragment and return the accumulated text.
    pub fn push(&mut self, fragment: &str) -> &str {
        self.text.push_str(fragment);
        self.fragments += 1;
        &self.text
    }

    /// Number of fragments received.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    /// Malformed records dropped while decoding.
    #[must_use]
    pub fn skipped_records(&self) -> usize {
        self.skipped
    }

    /// Turn the accumulated text into a model message, if there is any.
    #[must_use]
    pub fn flush(self) -> Option<ChatMessage> {
        (!self.text.is_empty()).then(|| ChatMessage::model(self.text))
    }
}

/// Runs guide turns against a generation endpoint.
#[derive(Clone)]
pub struct MuseumGuide {
    driver: Arc<dyn GenerationDriver>,
}

impl std::fmt::Debug for MuseumGuide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MuseumGuide").finish_non_exhaustive()
    }
}

impl MuseumGuide {
    /// Create a guide backed by `driver`.
    #[must_use]
    pub fn new(driver: Arc<dyn GenerationDriver>) -> Self {
        Self { driver }
    }

    /// Build the request body: preamble, history, then the new user turn.
    #[must_use]
    pub fn build_request(
        language: Language,
        history: &[ChatMessage],
        user_text: &str,
    ) -> GenerationRequest {
        let mut contents = Vec::with_capacity(history.len() + 2);
        contents.push(Content::text(Role::User, prompt::museum_context(language)));
        contents.extend(history.iter().map(ChatMessage::to_content));
        contents.push(Content::text(Role::User, user_text));
        GenerationRequest { contents }
    }

    /// Send `input` as the next visitor turn of `conversation`.
    ///
    /// Empty input and sends made while a turn is in flight are ignored. On
    /// transmission failure the pending user turn is rolled back and exactly
    /// one failure notification is shown.
    pub async fn send(
        &self,
        conversation: &Conversation,
        input: &str,
        view: &mut dyn GuideView,
    ) -> SendOutcome {
        let text = input.trim();
        if text.is_empty() {
            tracing::debug!(session_id = %conversation.id(), "Ignoring empty guide input");
            return SendOutcome::Ignored(IgnoreReason::EmptyInput);
        }

        let Some(turn) = conversation.begin_turn() else {
            tracing::debug!(session_id = %conversation.id(), "Ignoring send while a turn is in flight");
            return SendOutcome::Ignored(IgnoreReason::InFlight);
        };

        let language = conversation.language();
        let history = conversation.messages();
        let user = ChatMessage::user(text);
        turn.append(user.clone());
        view.input_cleared();
        view.user_message(&user);

        tracing::info!(
            session_id = %conversation.id(),
            language = %language,
            history_len = history.len(),
            "Starting guide turn"
        );

        let request = Self::build_request(language, &history, text);
        match self.stream_answer(request, view).await {
            Ok(buffer) => {
                let fragment_count = buffer.fragment_count();
                let skipped_records = buffer.skipped_records();
                let reply = buffer.flush();
                if let Some(reply) = &reply {
                    turn.append(reply.clone());
                    view.committed(reply);
                }
                tracing::info!(
                    session_id = %conversation.id(),
                    fragment_count,
                    skipped_records,
                    committed = reply.is_some(),
                    "Guide turn complete"
                );
                SendOutcome::Completed { reply }
            }
            Err(e) => {
                tracing::error!(
                    session_id = %conversation.id(),
                    error = %e,
                    "Guide turn failed"
                );
                turn.abort();
                view.aborted(&user);
                let t = Translator::new(language);
                view.notify(Notification::failure(t.t("notify.error"), t.t("ai.error")));
                SendOutcome::Failed
            }
        }
    }

    async fn stream_answer(
        &self,
        request: GenerationRequest,
        view: &mut dyn GuideView,
    ) -> Result<StreamBuffer, GenerationError> {
        let mut stream = self.driver.stream(request).await?;
        let mut decoder = FragmentDecoder::new();
        let mut buffer = StreamBuffer::default();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            for fragment in decoder.push(&chunk) {
                view.streaming(buffer.push(&fragment));
            }
        }
        if let Some(fragment) = decoder.finish() {
            view.streaming(buffer.push(&fragment));
        }

        buffer.skipped = decoder.skipped();
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ByteStream;
    use axum::body::Bytes;
    use std::sync::Mutex;

    /// Driver replaying canned bodies, one per call.
    struct ScriptedDriver {
        responses: Mutex<Vec<Result<Vec<Result<Bytes, GenerationError>>, GenerationError>>>,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedDriver {
        fn new(
            responses: Vec<Result<Vec<Result<Bytes, GenerationError>>, GenerationError>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn ok(chunks: &[&str]) -> Result<Vec<Result<Bytes, GenerationError>>, GenerationError> {
            Ok(chunks
                .iter()
                .map(|c| Ok(Bytes::from(c.to_string())))
                .collect())
        }
    }

    #[async_trait::async_trait]
    impl GenerationDriver for ScriptedDriver {
        async fn stream(&self, req: GenerationRequest) -> Result<ByteStream, GenerationError> {
            self.requests.lock().unwrap().push(req);
            let next = self.responses.lock().unwrap().remove(0)?;
            Ok(Box::pin(futures::stream::iter(next)))
        }
    }

    #[derive(Default)]
    struct RecordingView {
        cleared: usize,
        users: Vec<String>,
        snapshots: Vec<String>,
        committed: Vec<String>,
        aborted: Vec<String>,
        notifications: Vec<Notification>,
    }

    impl GuideView for RecordingView {
        fn input_cleared(&mut self) {
            self.cleared += 1;
        }
        fn user_message(&mut self, message: &ChatMessage) {
            self.users.push(message.content.clone());
        }
        fn streaming(&mut self, accumulated: &str) {
            self.snapshots.push(accumulated.to_string());
        }
        fn committed(&mut self, message: &ChatMessage) {
            self.committed.push(message.content.clone());
        }
        fn aborted(&mut self, user_message: &ChatMessage) {
            self.aborted.push(user_message.content.clone());
        }
        fn notify(&mut self, notification: Notification) {
            self.notifications.push(notification);
        }
    }

    fn record(text: &str) -> String {
        format!(
            "data: {}\n\n",
            serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
        )
    }

    #[tokio::test]
    async fn test_fragments_accumulate_and_commit() {
        let driver = ScriptedDriver::new(vec![ScriptedDriver::ok(&[&record("Hel"), &record("lo")])]);
        let guide = MuseumGuide::new(driver.clone());
        let conversation = ConversationStore::new().create();
        let mut view = RecordingView::default();

        let outcome = guide.send(&conversation, "  Hi there  ", &mut view).await;

        assert_eq!(
            outcome,
            SendOutcome::Completed {
                reply: Some(ChatMessage::model("Hello"))
            }
        );
        assert_eq!(view.snapshots, vec!["Hel", "Hello"]);
        assert_eq!(view.committed, vec!["Hello"]);
        assert_eq!(view.users, vec!["Hi there"]);
        assert_eq!(view.cleared, 1);
        assert_eq!(
            conversation.messages(),
            vec![ChatMessage::user("Hi there"), ChatMessage::model("Hello")]
        );
        assert!(!conversation.is_in_flight());
    }

    #[tokio::test]
    async fn test_empty_input_is_noop() {
        let driver = ScriptedDriver::new(vec![]);
        let guide = MuseumGuide::new(driver.clone());
        let conversation = ConversationStore::new().create();
        let mut view = RecordingView::default();

        for input in ["", "   ", "\n\t"] {
            let outcome = guide.send(&conversation, input, &mut view).await;
            assert_eq!(outcome, SendOutcome::Ignored(IgnoreReason::EmptyInput));
        }
        assert_eq!(conversation.message_count(), 0);
        assert_eq!(view.cleared, 0);
        assert!(driver.requests.lock().unwrap().is_empty());
    }

    /// Holds its single answer until the gate opens.
    struct GatedDriver {
        gate: Mutex<Option<tokio::sync::oneshot::Receiver<()>>>,
        calls: Mutex<usize>,
    }

    #[async_trait::async_trait]
    impl GenerationDriver for GatedDriver {
        async fn stream(&self, _req: GenerationRequest) -> Result<ByteStream, GenerationError> {
            *self.calls.lock().unwrap() += 1;
            let gate = self.gate.lock().unwrap().take().expect("one turn only");
            Ok(Box::pin(futures::stream::once(async move {
                let _ = gate.await;
                Ok(Bytes::from(record("Hi")))
            })))
        }
    }

    #[tokio::test]
    async fn test_send_while_in_flight_is_ignored() {
        let (release, gate) = tokio::sync::oneshot::channel();
        let driver = Arc::new(GatedDriver {
            gate: Mutex::new(Some(gate)),
            calls: Mutex::new(0),
        });
        let guide = MuseumGuide::new(driver.clone());
        let conversation = ConversationStore::new().create();
        let mut first_view = RecordingView::default();
        let mut second_view = RecordingView::default();

        let first = guide.send(&conversation, "one", &mut first_view);
        let second = async {
            while !conversation.is_in_flight() {
                tokio::task::yield_now().await;
            }
            let outcome = guide.send(&conversation, "two", &mut second_view).await;
            release.send(()).unwrap();
            outcome
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(second, SendOutcome::Ignored(IgnoreReason::InFlight));
        assert_eq!(
            first,
            SendOutcome::Completed {
                reply: Some(ChatMessage::model("Hi"))
            }
        );
        assert_eq!(
            conversation.messages(),
            vec![ChatMessage::user("one"), ChatMessage::model("Hi")]
        );
        assert_eq!(*driver.calls.lock().unwrap(), 1);
        assert_eq!(second_view.cleared, 0);
        assert!(second_view.users.is_empty());
        assert!(!conversation.is_in_flight());
    }

    #[tokio::test]
    async fn test_malformed_record_skipped() {
        let body = "data: bad-line\n\ndata: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hi\"}]}}]}\n\n";
        let driver = ScriptedDriver::new(vec![ScriptedDriver::ok(&[body])]);
        let guide = MuseumGuide::new(driver);
        let conversation = ConversationStore::new().create();
        let mut view = RecordingView::default();

        let outcome = guide.send(&conversation, "hello", &mut view).await;

        assert_eq!(
            outcome,
            SendOutcome::Completed {
                reply: Some(ChatMessage::model("Hi"))
            }
        );
        assert!(view.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_answer_counts_skipped_records() {
        let body = format!("data: bad-line\n\n{}data: [oops]\n\n", record("Hi"));
        let driver = ScriptedDriver::new(vec![ScriptedDriver::ok(&[&body])]);
        let guide = MuseumGuide::new(driver);
        let mut view = RecordingView::default();

        let buffer = guide
            .stream_answer(GenerationRequest { contents: Vec::new() }, &mut view)
            .await
            .unwrap();

        assert_eq!(buffer.fragment_count(), 1);
        assert_eq!(buffer.skipped_records(), 2);
    }

    #[tokio::test]
    async fn test_failing_status_leaves_log_unchanged() {
        let driver = ScriptedDriver::new(vec![
            ScriptedDriver::ok(&[&record("Welcome")]),
            Err(GenerationError::Status(reqwest::StatusCode::TOO_MANY_REQUESTS)),
        ]);
        let guide = MuseumGuide::new(driver);
        let conversation = ConversationStore::new().create();
        let mut view = RecordingView::default();

        guide.send(&conversation, "first", &mut view).await;
        let before = conversation.message_count();

        let outcome = guide.send(&conversation, "second", &mut view).await;

        assert_eq!(outcome, SendOutcome::Failed);
        assert_eq!(conversation.message_count(), before);
        assert_eq!(view.notifications.len(), 1);
        assert_eq!(view.notifications[0].variant, NotificationVariant::Destructive);
        assert_eq!(view.aborted, vec!["second"]);
        assert!(!conversation.is_in_flight());
    }

    #[tokio::test]
    async fn test_transport_error_mid_stream_discards_partial_answer() {
        let driver = ScriptedDriver::new(vec![Ok(vec![
            Ok(Bytes::from(record("partial"))),
            Err(GenerationError::Other("connection reset".to_string())),
        ])]);
        let guide = MuseumGuide::new(driver);
        let conversation = ConversationStore::new().create();
        let mut view = RecordingView::default();

        let outcome = guide.send(&conversation, "hello", &mut view).await;

        assert_eq!(outcome, SendOutcome::Failed);
        assert_eq!(conversation.message_count(), 0);
        assert!(view.committed.is_empty());
        assert_eq!(view.notifications.len(), 1);
        assert!(!conversation.is_in_flight());
    }

    #[tokio::test]
    async fn test_empty_stream_commits_nothing() {
        let driver = ScriptedDriver::new(vec![ScriptedDriver::ok(&["data: {}\n\n"])]);
        let guide = MuseumGuide::new(driver);
        let conversation = ConversationStore::new().create();
        let mut view = RecordingView::default();

        let outcome = guide.send(&conversation, "hello", &mut view).await;

        assert_eq!(outcome, SendOutcome::Completed { reply: None });
        assert_eq!(conversation.messages(), vec![ChatMessage::user("hello")]);
        assert!(view.committed.is_empty());
    }

    #[tokio::test]
    async fn test_request_carries_preamble_history_and_turn() {
        let driver = ScriptedDriver::new(vec![
            ScriptedDriver::ok(&[&record("One")]),
            ScriptedDriver::ok(&[&record("Two")]),
        ]);
        let guide = MuseumGuide::new(driver.clone());
        let conversation = ConversationStore::new().create();
        conversation.set_language(Language::Fr);
        let mut view = RecordingView::default();

        guide.send(&conversation, "a", &mut view).await;
        guide.send(&conversation, "b", &mut view).await;

        let requests = driver.requests.lock().unwrap();
        let second = &requests[1].contents;
        assert_eq!(second.len(), 4);
        assert_eq!(second[0].role, Role::User);
        assert!(second[0].parts[0].text.contains("Please respond in French."));
        assert_eq!(second[1], Content::text(Role::User, "a"));
        assert_eq!(second[2], Content::text(Role::Model, "One"));
        assert_eq!(second[3], Content::text(Role::User, "b"));
    }

    #[tokio::test]
    async fn test_failure_notification_is_localized() {
        let driver = ScriptedDriver::new(vec![Err(GenerationError::Other("down".to_string()))]);
        let guide = MuseumGuide::new(driver);
        let conversation = ConversationStore::new().create();
        conversation.set_language(Language::Fr);
        let mut view = RecordingView::default();

        guide.send(&conversation, "bonjour", &mut view).await;

        assert_eq!(view.notifications[0].title, "Erreur");
    }

    #[test]
    fn test_stream_buffer_flush() {
        let mut buffer = StreamBuffer::default();
        assert!(StreamBuffer::default().flush().is_none());
        assert_eq!(buffer.push("a"), "a");
        assert_eq!(buffer.push("b"), "ab");
        assert_eq!(buffer.fragment_count(), 2);
        assert_eq!(buffer.flush(), Some(ChatMessage::model("ab")));
    }
}
