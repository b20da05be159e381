//! CLI commands
//!
//! Command implementations for the `staticpub` binary.

mod host;
mod options;
mod preview;
mod publish;
mod state;
mod style;

pub use options::OptionArgs;
pub use preview::run_preview;
pub use publish::run_publish;
pub use state::run_state;
