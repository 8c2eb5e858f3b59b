//! # stamp-renderer
//!
//! Tera-based rendering of discovered templates against YAML data.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use stamp_core::{load_data, resolve, TemplateSuffix};
//! use stamp_renderer::Renderer;
//!
//! fn render_all(template: &Path, data: &Path) {
//!     let (Ok(set), Ok(data)) = (resolve(template, &TemplateSuffix::default()), load_data(data))
//!     else {
//!         return;
//!     };
//!     if let Ok(renderer) = Renderer::new(&set, &data) {
//!         for t in set.templates() {
//!             if let Ok(text) = renderer.render(t) {
//!                 println!("{}: {} bytes", t.display(), text.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::to_tera_context;
pub use engine::{Renderer, TemplateEngine};
pub use error::RenderError;
