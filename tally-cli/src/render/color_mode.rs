use clap::ValueEnum;

/// When to emit ANSI styling for highlights, labels, and the summary box.
///
/// `Auto` follows the terminal: color on a tty, monochrome when piped or
/// when `NO_COLOR` is set.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
