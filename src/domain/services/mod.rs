pub mod actions;
mod app_state;
mod state_store;
mod transcript;

pub use app_state::*;
pub use state_store::*;
pub use transcript::*;
