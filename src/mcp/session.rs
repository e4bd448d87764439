//! SSE session registry
//!
//! Each streaming connection gets a UUID and an mpsc channel. Posted
//! messages look the sender up by id; the SSE stream drains the receiver.

use std::collections::HashMap;
use std::sync::RwLock;
use tokio::sync::mpsc;
use uuid::Uuid;

use super::protocol::JsonRpcResponse;

/// Outbound message buffer per session
const SESSION_CHANNEL_CAPACITY: usize = 32;

/// Handle held by the SSE stream for one session
pub struct SessionHandle {
    pub id: Uuid,
    pub receiver: mpsc::Receiver<JsonRpcResponse>,
}

/// Registry of live streaming sessions
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, mpsc::Sender<JsonRpcResponse>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a new session and return its handle
    pub fn open(&self) -> SessionHandle {
        let id = Uuid::new_v4();
        let (sender, receiver) = mpsc::channel(SESSION_CHANNEL_CAPACITY);

        let mut sessions = self.sessions.write().expect("session registry poisoned");
        sessions.insert(id, sender);

        SessionHandle { id, receiver }
    }

    /// Remove a session; safe to call for ids that are already gone
    pub fn close(&self, id: &Uuid) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.remove(id);
        }
    }

    /// Look up the outbound sender for a session
    ///
    /// The sender is cloned out so no lock is held while sending.
    pub fn sender(&self, id: &Uuid) -> Option<mpsc::Sender<JsonRpcResponse>> {
        let sessions = self.sessions.read().ok()?;
        sessions.get(id).cloned()
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
