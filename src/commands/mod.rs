//! Command implementations

pub mod context;
pub mod score;
pub mod simple;
pub mod status;

pub use context::{Clock, GameContext, Overrides, Today};
pub use score::run_score;
pub use simple::run_simple;
pub use status::run_status;
