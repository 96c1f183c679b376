//! Prompt submission lifecycle on the native side

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use happyform_core::{Applied, FormSession, GenerationError, RenderedForm};

use super::generation_client::FormGenerator;

pub type SharedSession = Arc<RwLock<FormSession>>;

/// Drives one [`FormSession`] against a [`FormGenerator`].
///
/// Submissions are not serialized: a second call may start while the first
/// is in flight, and only the most recent one is applied.
#[derive(Clone)]
pub struct PromptSubmitter {
    session: SharedSession,
    generator: Arc<dyn FormGenerator>,
}

impl PromptSubmitter {
    pub fn new(generator: Arc<dyn FormGenerator>) -> Self {
        Self::with_session(Arc::new(RwLock::new(FormSession::new())), generator)
    }

    pub fn with_session(session: SharedSession, generator: Arc<dyn FormGenerator>) -> Self {
        Self { session, generator }
    }

    pub fn session(&self) -> SharedSession {
        self.session.clone()
    }

    /// Send `prompt` to the generator and apply the outcome to the session
    pub async fn submit(&self, prompt: &str) -> Applied {
        let ticket = self.session.write().await.begin();
        debug!(ticket = ticket.sequence(), "Submitting prompt");

        // The lock is not held across the request
        let result = self.generator.generate(prompt).await;

        match &result {
            Err(e @ GenerationError::RequestFailure(_)) => {
                error!(ticket = ticket.sequence(), "Form generation failed: {}", e)
            }
            Err(e @ GenerationError::InvalidResponseShape(_)) => {
                warn!(ticket = ticket.sequence(), "Rejected generation response: {}", e)
            }
            Ok(fields) => info!(
                ticket = ticket.sequence(),
                fields = fields.renderable_count(),
                "Form generated"
            ),
        }

        let applied = self.session.write().await.complete(ticket, result);
        if applied == Applied::Stale {
            debug!(ticket = ticket.sequence(), "Discarded superseded response");
        }
        applied
    }

    pub async fn is_busy(&self) -> bool {
        self.session.read().await.is_busy()
    }

    pub async fn rendered(&self) -> RenderedForm {
        self.session.read().await.rendered()
    }
}
