//! Domain Layer
//!
//! Pure types and rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Lockfile and Manifest
//! - `value_objects/` - AssetRef, AssetType, ContentHash, path helpers
//! - `services/` - Drift checking
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
