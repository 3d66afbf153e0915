// Console helpers shared by every example program: logging setup,
// banners, dividers and the exit prompt.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

/// Installs the stderr `tracing` subscriber. Safe to call more than once.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

pub fn banner(title: &str) -> String {
    format!("--- {} ---", title)
}

pub fn divider(width: usize) -> String {
    "-".repeat(width)
}

/// Prints the program banner followed by a blank line.
pub fn header(title: &str) {
    println!("{}\n", banner(title).bold().cyan());
}

pub fn section(title: &str) {
    println!("{}", format!(">>> {}", title).bold());
}

pub fn rule(width: usize) {
    println!("\n{}\n", divider(width));
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn failure(message: &str) {
    println!("{}", message.red());
}

/// "Press a key to exit": waits for a line on stdin unless disabled.
pub fn pause() {
    if !Settings::global().pause_on_exit {
        return;
    }
    print!("\nPress Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    // EOF counts as a key press
    let _ = io::stdin().lock().read_line(&mut line);
}
