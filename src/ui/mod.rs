use chrono::Local;
use colored::{ColoredString, Colorize};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Disable colors unless both stdout and stderr are terminals and NO_COLOR
/// is unset.
pub fn init_colors() {
    if !colors_wanted(
        std::env::var_os("NO_COLOR").is_some(),
        atty::is(atty::Stream::Stdout),
        atty::is(atty::Stream::Stderr),
    ) {
        colored::control::set_override(false);
    }
}

fn colors_wanted(no_color: bool, stdout_tty: bool, stderr_tty: bool) -> bool {
    !no_color && stdout_tty && stderr_tty
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

fn line(level: ColoredString, msg: &str) -> String {
    format!(
        "{} - {} - {}",
        Local::now().format(TIMESTAMP_FORMAT).to_string().bright_black(),
        level,
        msg
    )
}

pub fn debug(msg: &str) {
    if is_verbose() && !is_quiet() {
        println!("{}", line("DEBUG".bright_black(), msg));
    }
}

pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{}", line("INFO".blue().bold(), msg));
    }
}

pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{}", line("INFO".green().bold(), msg));
    }
}

pub fn warning(msg: &str) {
    eprintln!("{}", line("WARNING".yellow().bold(), msg));
}

pub fn error(msg: &str) {
    eprintln!("{}", line("ERROR".red().bold(), msg));
}
