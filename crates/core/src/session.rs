use crate::models::Chunk;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// One uploaded document's state: the original filename and its chunk set.
/// Chunks live exactly as long as the session that owns them.
#[derive(Debug, Clone)]
pub struct DocumentSession {
    pub filename: String,
    pub chunks: Vec<Chunk>,
}

/// Opaque-id store scoping a chunk set to one user interaction. The core
/// writes chunks once at upload time and reads them per question; removal
/// is the session owner's responsibility.
pub trait SessionStore {
    fn insert(&self, filename: &str, chunks: Vec<Chunk>) -> String;

    fn get(&self, session_id: &str) -> Option<DocumentSession>;

    fn remove(&self, session_id: &str) -> bool;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, DocumentSession>>,
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, filename: &str, chunks: Vec<Chunk>) -> String {
        let session_id = Uuid::new_v4().to_string();
        let session = DocumentSession {
            filename: filename.to_string(),
            chunks,
        };

        self.sessions
            .lock()
            .expect("session map poisoned")
            .insert(session_id.clone(), session);

        session_id
    }

    fn get(&self, session_id: &str) -> Option<DocumentSession> {
        self.sessions
            .lock()
            .expect("session map poisoned")
            .get(session_id)
            .cloned()
    }

    fn remove(&self, session_id: &str) -> bool {
        self.sessions
            .lock()
            .expect("session map poisoned")
            .remove(session_id)
            .is_some()
    }
}
