pub mod index;
pub mod scorecard;
pub mod standings;
