//! In-memory session provider for tests.
//!
//! Counts acquired and still-open sessions so tests can assert that every
//! session handed to a request is released.
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::Note;
use crate::services::session::provider::{
    NoteSession, SessionError, SessionProvider, SessionResult,
};

#[derive(Default)]
struct Shared {
    notes: Mutex<Vec<Note>>,
    acquired: AtomicUsize,
    open: AtomicUsize,
    fail_acquire: AtomicBool,
    fail_inserts: AtomicBool,
    fail_queries: AtomicBool,
}

#[derive(Clone, Default)]
pub struct MemorySessionProvider {
    shared: Arc<Shared>,
}

impl MemorySessionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.shared.notes.lock().unwrap().clone()
    }

    pub fn seed(&self, notes: impl IntoIterator<Item = Note>) {
        self.shared.notes.lock().unwrap().extend(notes);
    }

    pub fn acquired(&self) -> usize {
        self.shared.acquired.load(Ordering::SeqCst)
    }

    pub fn open(&self) -> usize {
        self.shared.open.load(Ordering::SeqCst)
    }

    pub fn fail_acquire(&self, fail: bool) {
        self.shared.fail_acquire.store(fail, Ordering::SeqCst);
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.shared.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_queries(&self, fail: bool) {
        self.shared.fail_queries.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SessionProvider for MemorySessionProvider {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn acquire(&self) -> SessionResult<Box<dyn NoteSession>> {
        if self.shared.fail_acquire.load(Ordering::SeqCst) {
            return Err(SessionError::Acquire("no reachable servers".into()));
        }

        self.shared.acquired.fetch_add(1, Ordering::SeqCst);
        self.shared.open.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(MemorySession {
            shared: Arc::clone(&self.shared),
        }))
    }
}

struct MemorySession {
    shared: Arc<Shared>,
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        self.shared.open.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl NoteSession for MemorySession {
    async fn insert(&mut self, note: &Note) -> SessionResult<()> {
        if self.shared.fail_inserts.load(Ordering::SeqCst) {
            return Err(SessionError::Command("E11000 duplicate key".into()));
        }

        self.shared.notes.lock().unwrap().push(note.clone());
        Ok(())
    }

    async fn newest_first(&mut self) -> SessionResult<Vec<Note>> {
        if self.shared.fail_queries.load(Ordering::SeqCst) {
            return Err(SessionError::Command("query timed out".into()));
        }

        let mut notes = self.shared.notes.lock().unwrap().clone();
        notes.sort_by(|a, b| b.when.cmp(&a.when));
        Ok(notes)
    }
}
