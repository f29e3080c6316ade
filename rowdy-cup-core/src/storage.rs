use crate::model::{Course, HoleScore, Match, Player, Team};
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_teams(&self) -> Result<Vec<Team>, StorageError>;
    async fn get_players(&self) -> Result<Vec<Player>, StorageError>;
    async fn get_course(&self, course_id: i64) -> Result<Course, StorageError>;
    async fn get_matches(&self) -> Result<Vec<Match>, StorageError>;
    async fn get_match(&self, match_id: i64) -> Result<Match, StorageError>;
    async fn get_hole_scores(&self, match_id: i64) -> Result<Vec<HoleScore>, StorageError>;
    async fn upsert_hole_score(
        &self,
        match_id: i64,
        score: HoleScore,
    ) -> Result<(), StorageError>;
}
