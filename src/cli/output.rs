//! Terminal output formatting
//!
//! The harness reads results AND error messages from stdout; only logs and
//! diagnostics go to stderr. Colors respect NO_COLOR, CLICOLOR,
//! CLICOLOR_FORCE automatically and drop out when stdout is not a tty.

use colored::Colorize;

/// Print a formatted result line
pub fn result(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print an error message (red) to stdout, where the harness expects it
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().red());
}

/// Render a numeric result: whole values print without a fractional part,
/// everything else fixed to two decimal places.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        // + 0.0 folds negative zero into plain zero
        format!("{}", value + 0.0)
    } else {
        format!("{:.2}", value)
    }
}
