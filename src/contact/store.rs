//! Persistence seam for contact submissions.

use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{ContactSubmission, NewSubmission};

/// Tabular store holding contact submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync + std::fmt::Debug {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Insert one submission and return the stored record.
    async fn insert(&self, new: &NewSubmission) -> Result<ContactSubmission>;

    /// Every submission, newest first.
    async fn list_recent(&self) -> Result<Vec<ContactSubmission>>;
}

/// In-process store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemorySubmissionStore {
    rows: RwLock<Vec<ContactSubmission>>,
}

impl MemorySubmissionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, new: &NewSubmission) -> Result<ContactSubmission> {
        let row = ContactSubmission {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            email: new.email.clone(),
            subject: new.subject.clone(),
            message: new.message.clone(),
            created_at: Utc::now(),
        };
        self.rows.write().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_recent(&self) -> Result<Vec<ContactSubmission>> {
        // Rows are appended in creation order.
        Ok(self.rows.read().unwrap().iter().rev().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let store = MemorySubmissionStore::new();
        let new = NewSubmission {
            name: "n".to_string(),
            email: "e".to_string(),
            subject: "s".to_string(),
            message: "m".to_string(),
        };
        let a = store.insert(&new).await.unwrap();
        let b = store.insert(&new).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(b.created_at >= a.created_at);
        assert_eq!(store.list_recent().await.unwrap(), vec![b, a]);
    }
}
