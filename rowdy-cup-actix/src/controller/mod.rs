pub mod entry;
pub mod score;
pub mod standings;
