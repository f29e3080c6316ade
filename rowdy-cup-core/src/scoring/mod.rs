pub mod best_ball;
pub mod context;
pub mod handicap;
pub mod match_play;
pub mod net;
pub mod scorecard;
pub mod strokes;

pub use best_ball::*;
pub use context::*;
pub use handicap::*;
pub use match_play::*;
pub use net::*;
pub use scorecard::*;
pub use strokes::*;
