//! # stamp-batch
//!
//! Render pipeline and output writer.
//!
//! Call [`pipeline::run`] with a [`RenderRequest`] to render every discovered
//! template and write the results according to the chosen output mode.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::BatchError;
pub use pipeline::{RenderRequest, RenderSummary};
pub use writer::WriteResult;
