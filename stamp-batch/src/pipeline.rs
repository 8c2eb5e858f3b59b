//! Render pipeline entrypoint used by the CLI.
//!
//! Steps, in order, each aborting the run on failure:
//!
//! 1. Load the YAML data file.
//! 2. Resolve the template argument into a [`TemplateSet`].
//! 3. Bind the output mode to the set ([`OutputMapper`]).
//! 4. Parse every template into the engine.
//! 5. For each template in discovery order: render, map, write.
//!
//! Output mode conflicts are rejected by [`OutputMode::from_options`] before
//! a request is ever built. Files written before a failure stay on disk.

use std::path::{Path, PathBuf};

use stamp_core::{
    load_data, resolve, DataValue, OutputMapper, OutputMode, TemplateSet, TemplateSuffix,
};
use stamp_renderer::Renderer;

use crate::error::BatchError;
use crate::writer::{write_output, WriteResult};

/// Everything one render run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Template file or directory.
    pub template: PathBuf,
    /// YAML data file.
    pub data: PathBuf,
    pub mode: OutputMode,
    pub suffix: TemplateSuffix,
    /// Report destinations without writing anything.
    pub dry_run: bool,
}

impl RenderRequest {
    /// Request with the default suffix, [`OutputMode::Mirror`] and real writes.
    pub fn new(template: impl Into<PathBuf>, data: impl Into<PathBuf>) -> Self {
        RenderRequest {
            template: template.into(),
            data: data.into(),
            mode: OutputMode::default(),
            suffix: TemplateSuffix::default(),
            dry_run: false,
        }
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_suffix(mut self, suffix: TemplateSuffix) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a render run.
#[derive(Debug)]
pub struct RenderSummary {
    /// Template root the run was resolved against.
    pub root: PathBuf,
    /// One entry per template, in discovery order.
    pub writes: Vec<WriteResult>,
}

/// Run the render pipeline for `request`.
pub fn run(request: &RenderRequest) -> Result<RenderSummary, BatchError> {
    let data = load_data(&request.data)?;
    let set = resolve(&request.template, &request.suffix)?;
    tracing::info!(
        root = %set.root().display(),
        templates = set.len(),
        mode = %request.mode,
        "resolved templates"
    );

    let writes = render_set(&set, &data, &request.mode, request.dry_run)?;
    Ok(RenderSummary {
        root: set.root().to_path_buf(),
        writes,
    })
}

fn render_set(
    set: &TemplateSet,
    data: &DataValue,
    mode: &OutputMode,
    dry_run: bool,
) -> Result<Vec<WriteResult>, BatchError> {
    let mapper = OutputMapper::new(set, mode)?;
    let renderer = Renderer::new(set, data)?;

    let mut writes = Vec::with_capacity(set.len());
    for template in set.templates() {
        writes.push(render_one(&renderer, &mapper, template, dry_run)?);
    }
    Ok(writes)
}

fn render_one(
    renderer: &Renderer<'_>,
    mapper: &OutputMapper<'_>,
    template: &Path,
    dry_run: bool,
) -> Result<WriteResult, BatchError> {
    let content = renderer.render(template)?;
    let output = mapper.output_path(template)?;
    write_output(template, &output, &content, dry_run)
}
