//! Command handlers for the `cops` binary

mod asset;
mod check;
mod context;
mod project_root;
mod sync;

pub use asset::cmd_asset;
pub use check::cmd_check;
pub use context::Context;
pub use sync::cmd_sync;
