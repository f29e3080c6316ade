pub mod scorecard;
pub mod types;

pub use scorecard::*;
pub use types::*;
