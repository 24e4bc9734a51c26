use anyhow::Context;
use colored::Colorize;
use migstat_source::{collect_status, DiscoverOptions};
use migstat_status::{MigrationRecord, StatusIndex, StatusSummary, TableConfig};
use serde::Serialize;

use crate::cli::*;
use crate::config::{CliConfig, StatusSettings};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Status(args) => cmd_status(args, &config, &cli.format),
    }
}

fn cmd_status(args: StatusArgs, config: &CliConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let settings = StatusSettings::resolve(&args, config);
    if settings.source_dir.is_none() && settings.applied.is_empty() {
        tracing::warn!("no migration source or applied ledger given; report will be empty");
    }

    let options = DiscoverOptions {
        recursive: settings.recursive,
    };
    let index = collect_status(settings.source_dir.as_deref(), &options, &settings.applied)
        .context("failed to collect migration status")?;
    tracing::info!(versions = index.len(), "status index built");

    print!("{}", render_report(&index, format, &settings.table, args.summary)?);
    Ok(())
}

#[derive(Serialize)]
struct StatusReport<'a> {
    migrations: Vec<&'a MigrationRecord>,
    summary: StatusSummary,
}

/// Format `index` for stdout.
fn render_report(
    index: &StatusIndex,
    format: &OutputFormat,
    table: &TableConfig,
    with_summary: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let report = StatusReport {
                migrations: index.iter().collect(),
                summary: index.summary(),
            };
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = index.render_with(table);
            if with_summary {
                out.push('\n');
                out.push_str(&summary_line(&index.summary()));
                out.push('\n');
            }
            Ok(out)
        }
    }
}

fn summary_line(summary: &StatusSummary) -> String {
    let total = format!("{} migrations", summary.total).bold();
    if summary.is_in_sync() {
        return format!("{} {}, {}", "✓".green().bold(), total, "in sync".green());
    }
    format!(
        "{} {}: {} pending, {} applied without source, {} unknown",
        "!".yellow().bold(),
        total,
        summary.pending.to_string().yellow(),
        summary.orphaned.to_string().red(),
        summary.unknown.to_string().red(),
    )
}
