use std::collections::HashMap;
use std::sync::Mutex;

use tidy_core::TidyConfig;

use crate::Session;

/// In-memory session store keyed by id.
pub struct SessionManager {
    config: TidyConfig,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionManager {
    pub fn new(config: TidyConfig) -> Self {
        Self { config, sessions: Mutex::new(HashMap::new()) }
    }

    pub fn create(&self) -> Session {
        let session = Session::new(&self.config);
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id.clone(), session.clone());
        session
    }

    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions.lock().unwrap().get(id).cloned()
    }

    pub fn update(&self, id: &str, f: impl FnOnce(&mut Session)) -> Option<Session> {
        let mut map = self.sessions.lock().unwrap();
        if let Some(session) = map.get_mut(id) {
            f(session);
            Some(session.clone())
        } else {
            None
        }
    }

    pub fn remove(&self, id: &str) -> Option<Session> {
        self.sessions.lock().unwrap().remove(id)
    }

    pub fn list_ids(&self) -> Vec<String> {
        self.sessions.lock().unwrap().keys().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(TidyConfig::default())
    }
}
