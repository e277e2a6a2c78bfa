//! Contact form submission gateway.
//!
//! Validates that every field of the contact form is present and forwards the
//! payload, unchanged, to a [`SubmissionStore`]. There is no retry and no
//! idempotency key: a failed submit is reported once and left to the visitor.

pub mod postgres;
pub mod store;
pub mod supabase;

pub use store::{MemorySubmissionStore, SubmissionStore};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{PersistenceConfig, PersistenceProvider};
use crate::i18n::Translator;
use crate::notification::Notification;

/// Raw contact form as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    /// Visitor name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Names of the fields that are empty or whitespace, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check every field is present and produce the payload to store.
    pub fn validate(&self) -> Result<NewSubmission, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        Ok(NewSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

/// Validated payload handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSubmission {
    /// Visitor name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// A stored contact submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// Visitor name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Store-assigned creation time.
    pub created_at: DateTime<Utc>,
}

/// Errors raised by the submission gateway.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// One or more required fields were blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// The persistence collaborator failed.
    #[error("submission store error: {0}")]
    Store(#[from] anyhow::Error),
}

/// Validates contact forms and forwards them to a store.
#[derive(Clone)]
pub struct SubmissionGateway {
    store: Arc<dyn SubmissionStore>,
}

impl std::fmt::Debug for SubmissionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionGateway")
            .field("store", &self.store.name())
            .finish()
    }
}

impl SubmissionGateway {
    /// Create a gateway writing into `store`.
    #[must_use]
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// Validate `form` and persist it.
    ///
    /// The store is not called when validation fails.
    pub async fn submit(&self, form: &ContactForm) -> Result<ContactSubmission, ContactError> {
        let new = form.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected contact submission");
        })?;

        let stored = self.store.insert(&new).await.inspect_err(|e| {
            tracing::error!(store = self.store.name(), error = %e, "Failed to store contact submission");
        })?;

        tracing::info!(
            submission_id = %stored.id,
            store = self.store.name(),
            "Stored contact submission"
        );
        Ok(stored)
    }

    /// Every stored submission, newest first.
    pub async fn all_submissions(&self) -> Result<Vec<ContactSubmission>, ContactError> {
        Ok(self.store.list_recent().await?)
    }
}

/// Toast shown after a form submit.
#[must_use]
pub fn outcome_notification(
    outcome: &Result<ContactSubmission, ContactError>,
    t: Translator,
) -> Notification {
    match outcome {
        Ok(_) => Notification::success(t.t("notify.success"), t.t("contact.form.success")),
        Err(ContactError::MissingFields(_)) => {
            Notification::failure(t.t("notify.error"), t.t("contact.form.required"))
        }
        Err(ContactError::Store(_)) => {
            Notification::failure(t.t("notify.error"), t.t("contact.form.error"))
        }
    }
}

/// Build the store selected by `config`.
pub async fn build_store(config: &PersistenceConfig) -> anyhow::Result<Arc<dyn SubmissionStore>> {
    let store: Arc<dyn SubmissionStore> = match config.provider {
        PersistenceProvider::Memory => Arc::new(MemorySubmissionStore::new()),
        PersistenceProvider::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("persistence.database_url is required for postgres"))?;
            Arc::new(postgres::PostgresSubmissionStore::new(url).await?)
        }
        PersistenceProvider::Supabase => {
            let url = config
                .supabase_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("persistence.supabase_url is required for supabase"))?;
            let key = config
                .supabase_key
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("persistence.supabase_key is required for supabase"))?;
            Arc::new(supabase::SupabaseSubmissionStore::new(url, key))
        }
    };
    tracing::info!(store = store.name(), "Submission store ready");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::notification::NotificationVariant;

    fn form() -> ContactForm {
        ContactForm {
            name: "Amina".to_string(),
            email: "amina@example.dz".to_string(),
            subject: "Group visit".to_string(),
            message: "We are twelve.".to_string(),
        }
    }

    #[derive(Debug)]
    struct BrokenStore;

    #[async_trait::async_trait]
    impl SubmissionStore for BrokenStore {
        fn name(&self) -> &'static str {
            "broken"
        }
        async fn insert(&self, _new: &NewSubmission) -> anyhow::Result<ContactSubmission> {
            anyhow::bail!("table unreachable")
        }
        async fn list_recent(&self) -> anyhow::Result<Vec<ContactSubmission>> {
            anyhow::bail!("table unreachable")
        }
    }

    #[test]
    fn test_missing_fields_reports_blank_values() {
        let mut f = form();
        f.email = "   ".to_string();
        f.message.clear();
        assert_eq!(f.missing_fields(), vec!["email", "message"]);
        let err = f.validate().unwrap_err();
        assert_eq!(err.to_string(), "missing required fields: email, message");
    }

    #[test]
    fn test_validate_forwards_verbatim() {
        let mut f = form();
        f.name = " Amina ".to_string();
        let new = f.validate().unwrap();
        assert_eq!(new.name, " Amina ");
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_store() {
        let gateway = SubmissionGateway::new(Arc::new(BrokenStore));
        let err = gateway.submit(&ContactForm::default()).await.unwrap_err();
        assert!(matches!(err, ContactError::MissingFields(ref f) if f.len() == 4));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces() {
        let gateway = SubmissionGateway::new(Arc::new(BrokenStore));
        let outcome = gateway.submit(&form()).await;
        assert!(matches!(outcome, Err(ContactError::Store(_))));

        let toast = outcome_notification(&outcome, Translator::new(Language::En));
        assert_eq!(toast.variant, NotificationVariant::Destructive);
    }

    #[tokio::test]
    async fn test_submissions_listed_newest_first() {
        let gateway = SubmissionGateway::new(Arc::new(MemorySubmissionStore::new()));
        let mut first = form();
        first.subject = "first".to_string();
        let mut second = form();
        second.subject = "second".to_string();

        gateway.submit(&first).await.unwrap();
        gateway.submit(&second).await.unwrap();

        let all = gateway.all_submissions().await.unwrap();
        let subjects: Vec<_> = all.iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(subjects, vec!["second", "first"]);
    }

    #[test]
    fn test_success_notification_is_localized() {
        let outcome: Result<ContactSubmission, ContactError> = Ok(ContactSubmission {
            id: Uuid::new_v4(),
            name: "a".to_string(),
            email: "b".to_string(),
            subject: "c".to_string(),
            message: "d".to_string(),
            created_at: Utc::now(),
        });
        let toast = outcome_notification(&outcome, Translator::new(Language::Fr));
        assert_eq!(toast.variant, NotificationVariant::Default);
        assert_eq!(toast.description, crate::i18n::lookup(Language::Fr, "contact.form.success"));
    }
}
