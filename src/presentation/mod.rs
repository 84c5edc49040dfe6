//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use cops::presentation::factory::{self, Project};
//!
//! let project = Project::new(".", Config::load_or_default(None));
//! let report = factory::create_check_use_case(&project).execute(&project.files())?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{AssetAction, Cli, Commands};
pub use factory::Project;
pub use output::{create_renderer, supports_unicode, OutputFormat, Renderer};
