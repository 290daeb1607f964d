use std::sync::Arc;

use grader::{GeminiGrader, Grader};
use store::SessionStore;

/// Shared application state handed to every handler: the in-memory session
/// store and the grading strategy. Cloning is cheap (two handles).
#[derive(Clone)]
pub struct AppState {
    sessions: SessionStore,
    grader: Arc<dyn Grader>,
}

impl AppState {
    /// Wire the production state: an empty session store and the Gemini-backed
    /// grader configured from the environment.
    pub fn new() -> Self {
        Self::with_grader(Arc::new(GeminiGrader::from_config()))
    }

    /// Build state around an arbitrary grading strategy. Tests use this to
    /// substitute deterministic mocks for the remote call.
    pub fn with_grader(grader: Arc<dyn Grader>) -> Self {
        Self {
            sessions: SessionStore::new(),
            grader,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn grader(&self) -> Arc<dyn Grader> {
        self.grader.clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
