//! `stamp render <template> <data> [--output FILE | --directory DIR]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use stamp_batch::{pipeline, RenderRequest, RenderSummary, WriteResult};
use stamp_core::{OutputMode, TemplateSuffix, DEFAULT_TEMPLATE_SUFFIX};

/// Arguments for `stamp render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template file or directory with templates.
    pub template: PathBuf,

    /// YAML file with data to insert in the templates.
    pub data: PathBuf,

    /// Output file (only if a single template file is specified).
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output directory. Defaults to writing beside each template.
    #[arg(long, short = 'D', value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// File name ending that marks a template; stripped from output names.
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_TEMPLATE_SUFFIX)]
    pub suffix: String,

    /// Show what would be written without writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        // Validated before any filesystem access.
        let mode = OutputMode::from_options(self.output, self.directory)?;
        let suffix = TemplateSuffix::new(self.suffix)?;

        let request = RenderRequest::new(&self.template, &self.data)
            .with_mode(mode)
            .with_suffix(suffix)
            .dry_run(self.dry_run);
        tracing::debug!(?request, "starting render");
        let summary = pipeline::run(&request)
            .with_context(|| format!("render failed for '{}'", self.template.display()))?;

        print_summary(&summary, self.dry_run);
        Ok(())
    }
}

fn print_summary(summary: &RenderSummary, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let count = summary.writes.len();
    let noun = if count == 1 { "template" } else { "templates" };
    println!(
        "{prefix}{} rendered {count} {noun} from {}",
        "✓".green(),
        summary.root.display()
    );

    for r in &summary.writes {
        let template = r.template();
        let template = template.strip_prefix(&summary.root).unwrap_or(template);
        let marker = match r {
            WriteResult::Written { .. } => "✎",
            WriteResult::WouldWrite { .. } => "~",
        };
        println!(
            "  {marker}  {} → {}",
            template.display(),
            r.path().display()
        );
    }
}
