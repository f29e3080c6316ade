use chrono::{Duration, NaiveDateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const SESSION_TTL_HOURS: i64 = 12;

/// Session tokens handed out to scorekeepers after a password check.
/// Tokens live in memory only; a restart logs everyone out.
pub struct SessionStore {
    admin_password: String,
    sessions: RwLock<HashMap<String, NaiveDateTime>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(admin_password: String) -> Self {
        Self {
            admin_password,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Exchange the admin password for a fresh session token.
    pub async fn login(&self, password: &str) -> Option<String> {
        if password != self.admin_password {
            return None;
        }
        let token = Uuid::new_v4().to_string();
        let expires = Utc::now().naive_utc() + Duration::hours(SESSION_TTL_HOURS);
        self.sessions.write().await.insert(token.clone(), expires);
        Some(token)
    }

    /// Check a token, dropping any that have expired along the way.
    pub async fn validate(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        let now = Utc::now().naive_utc();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, expires| *expires > now);
        sessions.contains_key(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let store = SessionStore::new("letmein".to_string());
        assert!(store.login("wrong").await.is_none());
        assert!(store.login("letmein").await.is_some());
    }

    #[tokio::test]
    async fn tokens_validate_until_forgotten() {
        let store = SessionStore::new("letmein".to_string());
        let token = store.login("letmein").await.unwrap();
        assert!(store.validate(&token).await);
        assert!(!store.validate("no-such-token").await);
        assert!(!store.validate("").await);
    }
}
