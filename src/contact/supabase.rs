//! Supabase (PostgREST) submission store.

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{ContactSubmission, NewSubmission, SubmissionStore};

const TABLE: &str = "contact_submissions";

/// Store talking to a Supabase project's REST endpoint.
#[derive(Clone)]
pub struct SupabaseSubmissionStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for SupabaseSubmissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseSubmissionStore")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SupabaseSubmissionStore {
    /// Create a store for the project at `base_url` using the anon/service `api_key`.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{TABLE}", self.base_url)
    }

    fn authorized(&self, rb: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        rb.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[async_trait]
impl SubmissionStore for SupabaseSubmissionStore {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn insert(&self, new: &NewSubmission) -> Result<ContactSubmission> {
        let rows: Vec<ContactSubmission> = self
            .authorized(self.http.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[new])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("decoding inserted submission")?;

        rows.into_iter()
            .next()
            .context("insert returned no representation")
    }

    async fn list_recent(&self) -> Result<Vec<ContactSubmission>> {
        let rows = self
            .authorized(self.http.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("decoding submissions")?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = SupabaseSubmissionStore::new("https://project.supabase.co/", "key");
        assert_eq!(
            store.table_url(),
            "https://project.supabase.co/rest/v1/contact_submissions"
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let store = SupabaseSubmissionStore::new("https://project.supabase.co", "service-key");
        assert!(!format!("{store:?}").contains("service-key"));
    }
}
