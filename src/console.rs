//! Human-readable progress output.
//!
//! Everything the user is meant to read goes through here; diagnostic detail
//! goes through `log` instead.

use std::io::Write;

/// Width of the `=` and `-` rules.
const RULE_WIDTH: usize = 50;

/// Check mark printed after a successful item.
pub const OK: &str = "✓";
/// Cross printed after a failed item.
pub const FAIL: &str = "✗";

/// A banner: `=` rule, title, `=` rule, blank line.
pub fn header(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

/// A section heading: blank line, title, `-` rule.
pub fn section(title: &str) -> String {
    format!("\n{title}\n{}", "-".repeat(RULE_WIDTH))
}

pub fn print_header(title: &str) {
    println!("{}", header(title));
}

pub fn print_section(title: &str) {
    println!("{}", section(title));
}

/// Start an item line (`  Downloading X... `) without a newline.
///
/// Finish it with [`item_ok`] or [`item_failed`].
pub fn item_start(action: &str) {
    print!("  {action}... ");
    let _ = std::io::stdout().flush();
}

pub fn item_ok() {
    println!("{OK}");
}

pub fn item_failed(reason: &str) {
    println!("{}", failure_line(reason));
}

/// The text [`item_failed`] prints.
pub fn failure_line(reason: &str) -> String {
    format!("{FAIL} Error: {reason}")
}
