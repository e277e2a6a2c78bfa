//! Bardo Museum Site
//!
//! A multilingual (English, French, Arabic) museum website served as
//! server-rendered HTML, with a streaming AI guide and a contact form.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server; pages are plain HTML, the guide streams over SSE
//! - **Guide**: conversation log and turn runner over a Gemini streaming endpoint
//! - **Contact**: form validation in front of a pluggable submission store
//! - **UI**: page shell with navigation, language menu, theme toggle and toasts
//!
//! # Modules
//!
//! - [`config`]: layered configuration (defaults, YAML, environment, CLI)
//! - [`contact`]: submission gateway and stores (memory, Postgres, Supabase)
//! - [`guide`]: museum guide conversation and streaming turns
//! - [`i18n`]: translation tables and language detection
//! - [`llm`]: generation driver trait and the Gemini implementation
//! - [`pages`]: page catalogue and HTML handlers

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::assigning_clones)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod contact;
pub mod guide;
pub mod i18n;
pub mod llm;
pub mod notification;
pub mod pages;
pub mod preferences;
pub mod security;
pub mod server;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::contact::SubmissionGateway;
use crate::contact::store::SubmissionStore;
use crate::guide::{ConversationStore, MuseumGuide};
use crate::llm::GenerationDriver;
use crate::security::rate_limit::SiteRateLimiter;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global configuration.
    pub config: Arc<AppConfig>,
    /// Guide turn runner.
    pub guide: MuseumGuide,
    /// Open guide conversations.
    pub conversations: ConversationStore,
    /// Contact form gateway.
    pub contact: SubmissionGateway,
    /// Separate budgets for guide turns and contact submissions.
    pub rate_limiter: Arc<SiteRateLimiter>,
}

impl AppState {
    /// Assemble state around a generation driver and a submission store.
    #[must_use]
    pub fn new(
        config: Arc<AppConfig>,
        driver: Arc<dyn GenerationDriver>,
        store: Arc<dyn SubmissionStore>,
    ) -> Self {
        let rate_limiter = Arc::new(SiteRateLimiter::new(
            config.resilience.requests_per_second,
            config.resilience.burst_size,
        ));
        Self {
            config,
            guide: MuseumGuide::new(driver),
            conversations: ConversationStore::new(),
            contact: SubmissionGateway::new(store),
            rate_limiter,
        }
    }
}
