//! Conversation log and conversation storage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Language;
use crate::llm::{Content, Role};

/// Default conversation timeout (30 minutes).
pub const DEFAULT_CONVERSATION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// A visitor message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// A generated message.
    #[must_use]
    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }

    /// Wire form of this message.
    #[must_use]
    pub fn to_content(&self) -> Content {
        Content::text(self.role, self.content.clone())
    }
}

/// State of one guide widget instance.
///
/// The message log is append-only for everyone except the holder of the
/// in-flight [`TurnGuard`], which may abort its own pending user turn.
#[derive(Debug, Clone)]
pub struct Conversation {
    inner: Arc<ConversationInner>,
}

#[derive(Debug)]
struct ConversationInner {
    id: String,
    messages: RwLock<Vec<ChatMessage>>,
    language: RwLock<Language>,
    in_flight: AtomicBool,
    last_activity: RwLock<DateTime<Utc>>,
}

impl Conversation {
    fn new(id: String) -> Self {
        Self {
            inner: Arc::new(ConversationInner {
                id,
                messages: RwLock::new(Vec::new()),
                language: RwLock::new(Language::default()),
                in_flight: AtomicBool::new(false),
                last_activity: RwLock::new(Utc::now()),
            }),
        }
    }

    /// Get the conversation ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Language the guide answers in.
    #[must_use]
    pub fn language(&self) -> Language {
        *self.inner.language.read().unwrap()
    }

    /// Change the answer language for subsequent turns.
    pub fn set_language(&self, language: Language) {
        *self.inner.language.write().unwrap() = language;
        self.touch();
    }

    /// Snapshot of the committed messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner.messages.read().unwrap().clone()
    }

    /// Number of committed messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.inner.messages.read().unwrap().len()
    }

    /// Whether a turn is currently streaming.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    /// Try to take the in-flight token.
    ///
    /// Returns `None` when another turn already holds it. The token is released
    /// when the returned guard drops, whatever path the turn exits by.
    #[must_use]
    pub fn begin_turn(&self) -> Option<TurnGuard> {
        self.inner
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.touch();
        let start_len = self.message_count();
        Some(TurnGuard {
            conversation: self.clone(),
            start_len,
        })
    }

    fn push(&self, message: ChatMessage) {
        self.inner.messages.write().unwrap().push(message);
        self.touch();
    }

    fn touch(&self) {
        *self.inner.last_activity.write().unwrap() = Utc::now();
    }

    /// Check if the conversation has been idle longer than `timeout`.
    ///
    /// A conversation with a turn in flight never expires.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        if self.is_in_flight() {
            return false;
        }
        let last = *self.inner.last_activity.read().unwrap();
        match (Utc::now() - last).to_std() {
            Ok(idle) => idle > timeout,
            // Negative duration means clock skew.
            Err(_) => false,
        }
    }
}

/// Exclusive right to run one turn of a conversation.
#[derive(Debug)]
pub struct TurnGuard {
    conversation: Conversation,
    start_len: usize,
}

impl TurnGuard {
    /// Append a message to the log.
    pub fn append(&self, message: ChatMessage) {
        self.conversation.push(message);
    }

    /// Drop every message appended during this turn.
    pub fn abort(&self) {
        let mut guard = self.conversation.inner.messages.write().unwrap();
        guard.truncate(self.start_len);
    }
}

impl Drop for TurnGuard {
    fn drop(&mut self) {
        self.conversation
            .inner
            .in_flight
            .store(false, Ordering::Release);
        self.conversation.touch();
    }
}

/// Thread-safe store for conversations.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    inner: Arc<RwLock<HashMap<String, Conversation>>>,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new conversation and return it.
    #[must_use]
    pub fn create(&self) -> Conversation {
        let conversation = Conversation::new(Uuid::new_v4().to_string());
        self.inner
            .write()
            .unwrap()
            .insert(conversation.id().to_string(), conversation.clone());
        conversation
    }

    /// Get a conversation by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Conversation> {
        self.inner.read().unwrap().get(id).cloned()
    }

    /// Get a conversation by ID, or create a fresh one when the ID is unknown.
    ///
    /// Unknown IDs are not adopted: the fresh conversation gets its own ID so
    /// clients cannot pick identifiers.
    #[must_use]
    pub fn get_or_create(&self, id: Option<&str>) -> Conversation {
        id.filter(|id| !id.is_empty())
            .and_then(|id| self.get(id))
            .unwrap_or_else(|| self.create())
    }

    /// Number of live conversations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if there are no conversations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove conversations idle for longer than the default timeout.
    pub fn cleanup_expired(&self) -> usize {
        self.cleanup_expired_with_timeout(DEFAULT_CONVERSATION_TIMEOUT)
    }

    /// Remove conversations idle for longer than `timeout`.
    ///
    /// Returns the number of conversations removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.write().unwrap();
        let before = guard.len();
        guard.retain(|_, c| !c.is_expired_with_timeout(timeout));
        before - guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_guard_is_exclusive() {
        let store = ConversationStore::new();
        let conversation = store.create();

        let guard = conversation.begin_turn().expect("first turn");
        assert!(conversation.is_in_flight());
        assert!(conversation.begin_turn().is_none());

        drop(guard);
        assert!(!conversation.is_in_flight());
        assert!(conversation.begin_turn().is_some());
    }

    #[test]
    fn test_abort_restores_length() {
        let conversation = ConversationStore::new().create();
        {
            let turn = conversation.begin_turn().unwrap();
            turn.append(ChatMessage::user("first"));
            turn.append(ChatMessage::model("answer"));
        }

        let turn = conversation.begin_turn().unwrap();
        turn.append(ChatMessage::user("second"));
        assert_eq!(conversation.message_count(), 3);
        turn.abort();
        assert_eq!(conversation.message_count(), 2);
        assert_eq!(conversation.messages()[1], ChatMessage::model("answer"));
    }

    #[test]
    fn test_get_or_create() {
        let store = ConversationStore::new();
        let existing = store.create();

        let same = store.get_or_create(Some(existing.id()));
        assert_eq!(same.id(), existing.id());

        let fresh = store.get_or_create(Some("made-up-id"));
        assert_ne!(fresh.id(), "made-up-id");
        assert_eq!(store.len(), 2);

        let _ = store.get_or_create(None);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_cleanup_expired() {
        let store = ConversationStore::new();
        let idle = store.create();
        let busy = store.create();
        let _turn = busy.begin_turn().unwrap();

        std::thread::sleep(Duration::from_millis(20));
        let removed = store.cleanup_expired_with_timeout(Duration::from_millis(5));

        assert_eq!(removed, 1);
        assert!(store.get(idle.id()).is_none());
        assert!(store.get(busy.id()).is_some());
    }

    #[test]
    fn test_language_defaults_to_english() {
        let conversation = ConversationStore::new().create();
        assert_eq!(conversation.language(), Language::En);
        conversation.set_language(Language::Ar);
        assert_eq!(conversation.language(), Language::Ar);
    }
}
