//! Colored console output helpers.

use colored::Colorize;

pub fn print_banner() {
    let banner = r"
   ___ _____ ___    ___ ___ _____ _   _ ___
  / __|_   _| __|  / __| __|_   _| | | | _ \
 | (__  | | | _|   \__ \ _|  | | | |_| |  _/
  \___| |_| |_|    |___/___| |_|  \___/|_|
";
    println!("{}", banner.cyan().bold());
    println!(
        "{}",
        "Bootstrap a CTF competition repository on GitHub".bright_black()
    );
}

/// Print a section header
pub fn print_section(title: &str) {
    println!();
    println!("{}", "═".repeat(60).bright_black());
    println!("{}", title.cyan().bold());
    println!("{}", "═".repeat(60).bright_black());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!();
    println!("{} {}", "✓".green().bold(), message.green());
    println!();
}
