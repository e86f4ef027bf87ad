use std::io::Write;

use colored::Colorize;
use colored::control::set_override;
use env_logger::Builder;
use log::{Level, LevelFilter};

/// Prefix of every diagnostic line, so generator output is easy to spot in
/// build logs.
const PREFIX: &str = "cmdgen";

pub fn init_logging(verbose: bool, no_color: bool) {
    // Disable colors globally if requested
    if no_color {
        set_override(false);
    }

    Builder::new()
        .filter_level(level_filter(verbose))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(record.level(), &record.args().to_string())
            )
        })
        .init();
}

fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_line(level: Level, message: &str) -> String {
    match level {
        Level::Error => format!("{}: {} {}", PREFIX, "error:".red().bold(), message),
        Level::Warn => format!("{}: {} {}", PREFIX, "warning:".yellow().bold(), message),
        _ => format!("{}: {}", PREFIX, message),
    }
}
