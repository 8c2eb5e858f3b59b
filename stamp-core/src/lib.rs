//! stamp core library — template discovery, output mapping, data loading.
//!
//! - [`resolver`] — turn a template argument into a [`TemplateSet`]
//! - [`output`] — [`OutputMapper`] from template location to output location
//! - [`data`] — YAML data file loading
//! - [`error`] — [`ResolveError`], [`DataError`]

pub mod data;
pub mod error;
pub mod output;
mod paths;
pub mod resolver;
pub mod types;

pub use data::load_data;
pub use error::{DataError, ResolveError};
pub use output::{ensure_parent_dir, OutputMapper};
pub use resolver::resolve;
pub use types::{DataValue, OutputMode, TemplateSet, TemplateSuffix, DEFAULT_TEMPLATE_SUFFIX};
