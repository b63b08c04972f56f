//! Colored terminal logging.
//!
//! Every line carries a bracketed command prefix, so interleaved output
//! from the pipeline stages stays attributable:
//!
//! ```ignore
//! log!("build"; "collected {} posts", count);
//! debug!("sitemap"; "{} unchanged", name);   // only with --verbose
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{IsTerminal, Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Verbose flag, flipped once by `--verbose` before any work starts.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print one prefixed line: `log!("build"; "done")`.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like [`log!`], but only when `--verbose` is active.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = style_prefix(module);

    let mut out = stdout().lock();
    // Terminals may hold a partially drawn line; piped output must not
    // see the clear sequence
    if out.is_terminal() {
        execute!(out, Clear(ClearType::UntilNewLine)).ok();
    }
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Bracket and color a prefix. Commands get their own colors; errors
/// red, everything else the default yellow.
#[inline]
fn style_prefix(module: &str) -> String {
    let tag = format!("[{module}]");
    match module {
        "check" => tag.bright_green().bold().to_string(),
        "query" => tag.bright_blue().bold().to_string(),
        "error" => tag.bright_red().bold().to_string(),
        _ => tag.bright_yellow().bold().to_string(),
    }
}
