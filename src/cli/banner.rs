//! ASCII art banner for interactive mode.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    frame: &'static str,
    eyes: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    frame: "\x1b[38;2;85;85;85m",
    eyes: "\x1b[38;2;119;146;227m",
    title: "\x1b[1;38;2;119;146;227m",
    subtitle: "\x1b[38;2;100;100;120m",
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    frame: "",
    eyes: "",
    title: "",
    subtitle: "",
    reset: "",
};

/// Prints the banter banner to stdout.
///
/// Renders ANSI true-color when stdout is a terminal,
/// falls back to plain text otherwise.
pub fn print_banner() {
    let c = if std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    println!();
    println!("  {}.---------.{}", c.frame, c.reset);
    println!(
        "  {}|{}  {}o   o{}  {}|{}",
        c.frame, c.reset, c.eyes, c.reset, c.frame, c.reset
    );
    println!(
        "  {}|{}  {}\\___/{}  {}|{}",
        c.frame, c.reset, c.eyes, c.reset, c.frame, c.reset
    );
    println!("  {}'---------'{}", c.frame, c.reset);
    println!("   {}banter{}", c.title, c.reset);
    println!(
        "   {}How can I help you today? (exit to quit){}",
        c.subtitle, c.reset
    );
    println!();
}
