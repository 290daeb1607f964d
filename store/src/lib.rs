//! # Session Store
//!
//! In-memory aggregate for grading sessions and their submissions. All state
//! lives in process memory for the lifetime of the service; there is no
//! persistence surface. The store is a cheap cloneable handle
//! (`Arc<RwLock<..>>`) that is constructor-injected wherever it is needed.
//!
//! ## Concurrency
//!
//! Concurrent grading tasks each write back exactly one submission entry,
//! keyed by `(session_id, submission_id)`. The targeted write operations
//! ([`SessionStore::record_result`] / [`SessionStore::record_error`]) are
//! silent no-ops when the target no longer exists, which makes the
//! delete-while-in-flight race harmless: a late completion is discarded
//! instead of resurrecting the submission or panicking. No awaits happen
//! while the lock is held.

pub mod models;

use std::sync::{Arc, RwLock};

use grader::GradingResult;

pub use models::{NewSession, Session, Submission, SubmissionStatus};

/// Ordered collection of sessions, newest first. Each session owns its own
/// submission list, also newest first.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<Vec<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from the given payload and prepend it to the list.
    /// Returns a copy of the stored session.
    pub fn create(&self, new: NewSession) -> Session {
        let session = Session::new(new);
        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(0, session.clone());
        session
    }

    /// All sessions, newest first.
    pub fn list(&self) -> Vec<Session> {
        self.sessions.read().unwrap().clone()
    }

    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions
            .read()
            .unwrap()
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
    }

    /// Replace the session with the same id. Returns `false` when no such
    /// session exists.
    pub fn update(&self, session: Session) -> bool {
        let mut sessions = self.sessions.write().unwrap();
        match sessions.iter_mut().find(|s| s.id == session.id) {
            Some(slot) => {
                *slot = session;
                true
            }
            None => false,
        }
    }

    /// Delete a session and everything it owns. Returns `false` when no such
    /// session exists.
    pub fn delete(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.id != session_id);
        sessions.len() != before
    }

    /// Insert a new Pending submission at the front of the session's list,
    /// before any grading starts, so it is visible while the remote call is in
    /// flight. Returns a copy of the stored submission, or `None` when the
    /// session does not exist.
    pub fn add_submission(
        &self,
        session_id: &str,
        file_name: impl Into<String>,
        code: impl Into<String>,
    ) -> Option<Submission> {
        let submission = Submission::new(file_name, code);
        let mut sessions = self.sessions.write().unwrap();
        let session = sessions.iter_mut().find(|s| s.id == session_id)?;
        session.submissions.insert(0, submission.clone());
        Some(submission)
    }

    pub fn get_submission(&self, session_id: &str, submission_id: &str) -> Option<Submission> {
        self.get(session_id)?
            .submissions
            .into_iter()
            .find(|sub| sub.id == submission_id)
    }

    /// Transition a submission to Graded, clearing any previous error.
    /// Silently does nothing when the session or the submission is gone:
    /// a grading call that settles after its submission was deleted must not
    /// resurrect it.
    pub fn record_result(&self, session_id: &str, submission_id: &str, result: GradingResult) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(submission) = find_submission(&mut sessions, session_id, submission_id) {
            submission.result = Some(result);
            submission.error = None;
        }
    }

    /// Transition a submission to Failed, clearing any previous result. Same
    /// no-op rule as [`SessionStore::record_result`].
    pub fn record_error(&self, session_id: &str, submission_id: &str, message: impl Into<String>) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(submission) = find_submission(&mut sessions, session_id, submission_id) {
            submission.error = Some(message.into());
            submission.result = None;
        }
    }

    /// Delete a submission unconditionally, whatever its state. Returns
    /// `false` when the session or submission does not exist.
    pub fn remove_submission(&self, session_id: &str, submission_id: &str) -> bool {
        let mut sessions = self.sessions.write().unwrap();
        let Some(session) = sessions.iter_mut().find(|s| s.id == session_id) else {
            return false;
        };
        let before = session.submissions.len();
        session.submissions.retain(|sub| sub.id != submission_id);
        session.submissions.len() != before
    }
}

fn find_submission<'a>(
    sessions: &'a mut [Session],
    session_id: &str,
    submission_id: &str,
) -> Option<&'a mut Submission> {
    sessions
        .iter_mut()
        .find(|s| s.id == session_id)?
        .submissions
        .iter_mut()
        .find(|sub| sub.id == submission_id)
}
