//! File System Implementations
//!
//! Concrete implementations of the FileWriter port.

mod local;

pub use local::LocalFs;
