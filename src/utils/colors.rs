/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const CYAN: &str = "\x1b[36m";

/// Empty values are shown as a grey placeholder.
pub fn colorize_optional(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{placeholder}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_get_the_placeholder() {
        assert_eq!(colorize_optional("  ", "-"), format!("{GREY}-{RESET}"));
        assert_eq!(colorize_optional("Andre", "-"), "Andre");
    }
}
