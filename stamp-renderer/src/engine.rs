//! Tera rendering engine — [`TemplateEngine`] and [`Renderer`].
//!
//! The engine sees the whole template root, not just the discovered set:
//!
//! | File under the root  | Registered   | Parse failure  |
//! |----------------------|--------------|----------------|
//! | discovered template  | always       | aborts the run |
//! | other UTF-8 file     | if it parses | skipped        |
//! | non UTF-8 file       | never        | n/a            |
//!
//! Every file is registered under its root-relative key (`partials/head.html`),
//! so templates can `include`, `import` and `extend` one another by that name.
//! Only discovered templates are ever rendered to output.

use std::collections::HashSet;
use std::path::Path;

use tera::{Context, Tera};
use walkdir::WalkDir;

use stamp_core::{DataValue, TemplateSet};

use crate::context::to_tera_context;
use crate::error::{io_err, RenderError};

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn load_discovered(set: &TemplateSet) -> Result<Vec<(String, String)>, RenderError> {
    let mut templates = Vec::with_capacity(set.len());
    for template in set.templates() {
        let key = set.key(template)?;
        let content = std::fs::read_to_string(template).map_err(|e| io_err(template, e))?;
        templates.push((key, content));
    }
    Ok(templates)
}

/// Every other file under the root that Tera can parse. Unreadable entries
/// are skipped: a support file only matters once something includes it.
fn load_support_files(set: &TemplateSet, discovered: &HashSet<String>) -> Vec<(String, String)> {
    let mut support = Vec::new();
    for entry in WalkDir::new(set.canonical_root()).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry under template root");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Ok(key) = set.key(path) else { continue };
        if discovered.contains(&key) {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!(file = %key, "skipping non UTF-8 file");
            continue;
        };
        if let Err(err) = tera::Template::new(&key, None, &content) {
            tracing::debug!(file = %key, error = %err, "skipping file that does not parse");
            continue;
        }
        support.push((key, content));
    }
    support
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera instance loaded with every template under the root of one
/// [`TemplateSet`].
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Parse all templates of `set` plus includable files under its root.
    /// Syntax errors in discovered templates surface here, before anything is
    /// rendered or written.
    pub fn new(set: &TemplateSet) -> Result<Self, RenderError> {
        let discovered = load_discovered(set)?;
        let keys: HashSet<String> = discovered.iter().map(|(key, _)| key.clone()).collect();
        let support = load_support_files(set, &keys);
        tracing::debug!(
            templates = discovered.len(),
            support = support.len(),
            root = %set.canonical_root().display(),
            "loading templates into engine"
        );

        let mut tera = Tera::default();
        tera.add_raw_templates(discovered.into_iter().chain(support))?;
        Ok(TemplateEngine { tera })
    }

    /// Render the template registered as `key`.
    pub fn render(&self, key: &str, ctx: &Context) -> Result<String, RenderError> {
        Ok(self.tera.render(key, ctx)?)
    }

    /// Registered template names, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Engine plus the shared data context of one invocation.
///
/// Create once per [`TemplateSet`] and call [`Renderer::render`] per template.
pub struct Renderer<'a> {
    set: &'a TemplateSet,
    engine: TemplateEngine,
    ctx: Context,
}

impl<'a> Renderer<'a> {
    pub fn new(set: &'a TemplateSet, data: &DataValue) -> Result<Self, RenderError> {
        let ctx = to_tera_context(data)?;
        let engine = TemplateEngine::new(set)?;
        tracing::debug!(names = ?engine.template_names(), "engine ready");
        Ok(Renderer { set, engine, ctx })
    }

    /// Render one discovered template against the shared data.
    pub fn render(&self, template: &Path) -> Result<String, RenderError> {
        let key = self.set.key(template)?;
        tracing::debug!(template = %key, "rendering");
        self.engine.render(&key, &self.ctx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
