use async_trait::async_trait;
use rowdy_cup_core::model::{Course, HoleScore, Match, Player, Team};
use rowdy_cup_core::storage::{Storage, StorageError};
use sql_middleware::middleware::ConfigAndPool;

pub mod queries;

pub use queries::{create_tables, execute_batch_sql};

#[derive(Clone)]
pub struct SqlStorage {
    config_and_pool: ConfigAndPool,
}

impl SqlStorage {
    #[must_use]
    pub fn new(config_and_pool: ConfigAndPool) -> Self {
        Self { config_and_pool }
    }

    #[must_use]
    pub fn config_and_pool(&self) -> &ConfigAndPool {
        &self.config_and_pool
    }
}

#[async_trait]
impl Storage for SqlStorage {
    async fn get_teams(&self) -> Result<Vec<Team>, StorageError> {
        queries::get_teams(&self.config_and_pool)
            .await
            .map_err(|e| StorageError::new(e.to_string()))
    }

    async fn get_players(&self) -> Result<Vec<Player>, StorageError> {
        queries::get_players(&self.config_and_pool)
            .await
            .map_err(|e| StorageError::new(e.to_string()))
    }

    async fn get_course(&self, course_id: i64) -> Result<Course, StorageError> {
        queries::get_course(&self.config_and_pool, course_id)
            .await
            .map_err(|e| StorageError::new(e.to_string()))
    }

    async fn get_matches(&self) -> Result<Vec<Match>, StorageError> {
        queries::get_matches(&self.config_and_pool)
            .await
            .map_err(|e| StorageError::new(e.to_string()))
    }

    async fn get_match(&self, match_id: i64) -> Result<Match, StorageError> {
        queries::get_match(&self.config_and_pool, match_id)
            .await
            .map_err(|e| StorageError::new(e.to_string()))
    }

    async fn get_hole_scores(&self, match_id: i64) -> Result<Vec<HoleScore>, StorageError> {
        queries::get_hole_scores(&self.config_and_pool, match_id)
            .await
            .map_err(|e| StorageError::new(e.to_string()))
    }

    async fn upsert_hole_score(&self, match_id: i64, score: HoleScore) -> Result<(), StorageError> {
        queries::upsert_hole_score(&self.config_and_pool, match_id, &score)
            .await
            .map_err(|e| StorageError::new(e.to_string()))
    }
}
