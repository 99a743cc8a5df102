mod render;
mod scan;

use anyhow::{Context, Result};
use clap::Parser;
use render::{ColorMode, RenderOptions, Renderer};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tally_core::{Config, annotate_lines};

/// tally — duration totals for timestamped Markdown outlines
///
/// Reads a nested bullet list whose items carry `HH:MM - HH:MM` time
/// ranges, rolls child durations up into their parents, and prints the
/// document with an inline duration label on every timed item.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Markdown file to annotate. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,
    /// Print only the total tracked duration.
    #[arg(long, short)]
    total: bool,
    /// Annotations without ANSI styling or the summary box; just the
    /// document with labels spliced in. Implies `--color never`.
    #[arg(long, short)]
    plain: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tally: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let use_color = resolve_use_color(cli.color, cli.plain);
    let renderer = Renderer::new(Some(RenderOptions { use_color }));

    let text = read_document(cli.file.as_deref())?;
    let descriptors = scan::scan_document(&text, config.tab_width);
    let result = annotate_lines(&descriptors, &config.timer_label);

    if cli.total {
        renderer.print_info(&format!("Total tracked: {}", result.total));
        return Ok(());
    }

    print!("{}", renderer.render_document(&text, &result.annotations));
    if !cli.plain && !result.total.is_zero() {
        renderer.print_info(&format!("Total tracked: {}", result.total));
    }
    Ok(())
}

fn resolve_use_color(color: ColorMode, plain: bool) -> bool {
    if plain {
        return false;
    }
    match color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    }
}

fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
