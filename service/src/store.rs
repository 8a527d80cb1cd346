use hashbrown::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use sweepd_core::GameSession;

/// Shared handle to one session. Mutating operations hold this lock for the
/// whole operation, which is what serializes concurrent moves per session.
pub type SessionHandle = Arc<Mutex<GameSession>>;

pub fn lock_session(handle: &SessionHandle) -> MutexGuard<'_, GameSession> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory session table keyed by the caller-supplied id. Sessions live
/// for the process lifetime; there is no eviction.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a session, silently replacing any prior session stored under
    /// the same id.
    pub fn put(&self, id: &str, session: GameSession) -> SessionHandle {
        let handle = Arc::new(Mutex::new(session));
        self.lock_table().insert(id.to_owned(), Arc::clone(&handle));
        handle
    }

    /// Clones the handle out, so the table lock is released before any
    /// session lock is taken.
    pub fn get(&self, id: &str) -> Option<SessionHandle> {
        self.lock_table().get(id).cloned()
    }

    fn lock_table(&self) -> MutexGuard<'_, HashMap<String, SessionHandle>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
