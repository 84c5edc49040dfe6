//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_ref;
mod asset_type;
mod hash;
mod path;

pub use asset_ref::{AssetRef, LATEST};
pub use asset_type::{validate_asset_name, AssetType, TARGET_ROOT};
pub use hash::ContentHash;
pub use path::{is_under_root, normalize_lock_path, relative_to_root, PathError, SafePath};
