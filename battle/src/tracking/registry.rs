//! Isolated sessions keyed by id

use std::collections::HashMap;

use super::session::BattleSession;
use crate::config::CalcConfig;

/// One session per conversation or user
///
/// Sessions never share state. Serializing access to a single session is
/// the host's job.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, BattleSession>,

    /// Config used for new sessions
    config: CalcConfig,
}

impl SessionRegistry {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            config,
        }
    }

    /// Get a session, creating it on first use
    pub fn get_or_create(&mut self, id: &str) -> &mut BattleSession {
        if !self.sessions.contains_key(id) {
            tracing::info!(session = id, "Creating battle session");
        }
        let config = &self.config;
        self.sessions
            .entry(id.to_string())
            .or_insert_with(|| BattleSession::new(config.clone()))
    }

    pub fn get(&self, id: &str) -> Option<&BattleSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut BattleSession> {
        self.sessions.get_mut(id)
    }

    /// Drop a session, returns it if it existed
    pub fn remove(&mut self, id: &str) -> Option<BattleSession> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Session ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sessions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_isolated() {
        let mut registry = SessionRegistry::default();
        registry.get_or_create("alice").advance_turn();
        registry.get_or_create("bob");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("alice").map(BattleSession::turn), Some(2));
        assert_eq!(registry.get("bob").map(BattleSession::turn), Some(1));
        assert_eq!(registry.ids(), vec!["alice", "bob"]);
    }

    #[test]
    fn test_get_or_create_reuses() {
        let mut registry = SessionRegistry::default();
        registry.get_or_create("a").advance_turn();
        assert_eq!(registry.get_or_create("a").turn(), 2);

        assert!(registry.remove("a").is_some());
        assert!(registry.is_empty());
        assert!(registry.get_mut("a").is_none());
    }

    #[test]
    fn test_new_sessions_use_registry_config() {
        let config = CalcConfig {
            level: 100,
            ..CalcConfig::default()
        };
        let mut registry = SessionRegistry::new(config);
        assert_eq!(registry.get_or_create("x").config.level, 100);
    }
}
