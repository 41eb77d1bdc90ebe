//! Live-preview sessions — the event-driven face of the renderer.
//!
//! A session owns one [`FormState`] and accepts field-changed events one at
//! a time, re-rendering synchronously after each. Sessions live in memory
//! only; dropping the process drops them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::form::FormState;
use crate::preview::progress::{progress_report, ProgressReport};
use crate::preview::renderer::render;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Session {0} not found")]
    NotFound(Uuid),

    #[error("Session limit reached ({0} active)")]
    CapacityExceeded(usize),
}

/// A single field-changed event from the form page.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub value: String,
}

/// One render outcome: the fragment that replaces the preview container plus
/// the progress indicator state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPreview {
    pub html: String,
    pub progress: ProgressReport,
}

/// Session state plus timestamps, as returned by `GET /api/v1/sessions/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub preview: RenderedPreview,
}

/// A live preview bound to one form. Applies field-changed events and
/// re-renders after each; holds no rendered output between events.
#[derive(Debug, Clone)]
pub struct LivePreview {
    state: FormState,
    total_steps: usize,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl LivePreview {
    pub fn new(total_steps: usize) -> Self {
        let now = Utc::now();
        Self {
            state: FormState::default(),
            total_steps,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies one field-changed event and returns the fresh render.
    /// An unknown field name is rejected and leaves the state untouched.
    pub fn apply(&mut self, change: &FieldChange) -> Result<RenderedPreview, SessionError> {
        if !self.state.set(&change.field, change.value.clone()) {
            return Err(SessionError::UnknownField(change.field.clone()));
        }
        self.updated_at = Utc::now();
        Ok(self.current())
    }

    /// Renders the current state. Pure with respect to the form state: two
    /// calls without an intervening event return identical output.
    pub fn current(&self) -> RenderedPreview {
        RenderedPreview {
            html: render(&self.state),
            progress: progress_report(&self.state, self.total_steps),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            created_at: self.created_at,
            updated_at: self.updated_at,
            preview: self.current(),
        }
    }
}

/// In-memory session registry shared across handlers.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, LivePreview>>,
}

impl SessionStore {
    /// Creates a session and returns its id with the initial (empty-form)
    /// render, mirroring the page's render-on-load behavior.
    pub async fn create(
        &self,
        total_steps: usize,
        max_sessions: usize,
    ) -> Result<(Uuid, RenderedPreview), SessionError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= max_sessions {
            return Err(SessionError::CapacityExceeded(sessions.len()));
        }
        let id = Uuid::new_v4();
        let session = LivePreview::new(total_steps);
        let preview = session.current();
        sessions.insert(id, session);
        Ok((id, preview))
    }

    pub async fn apply(
        &self,
        id: Uuid,
        change: &FieldChange,
    ) -> Result<RenderedPreview, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        session.apply(change)
    }

    pub async fn snapshot(&self, id: Uuid) -> Result<SessionSnapshot, SessionError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or(SessionError::NotFound(id))?;
        Ok(session.snapshot())
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id).ok_or(SessionError::NotFound(id))?;
        Ok(())
    }
}
