//! Raw input parsing for the command dispatcher.

use serde::{Deserialize, Serialize};

/// What a line of raw player input asks for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Numeric selection of a visible choice (1-9).
    Select(usize),
    /// Show the help text.
    Help,
    /// Show the collected items.
    Inventory,
    /// Return to the start scene (both `back` and `home` do this).
    Home,
    /// Anything else; echoed back with an unrecognized-command line.
    Unknown(String),
}

/// Parse one line of raw input.
///
/// Integers 1 through 9 select choices. Larger numbers and zero are not
/// selections; they fall through to the unknown-command path like any other
/// unmatched text. Text commands are case-insensitive.
pub fn parse_command(raw: &str) -> Command {
    let input = raw.trim();

    if let Ok(number) = input.parse::<u32>() {
        if (1..=9).contains(&number) {
            return Command::Select(number as usize);
        }
    }

    match input.to_lowercase().as_str() {
        "help" => Command::Help,
        "inventory" | "items" => Command::Inventory,
        "back" | "home" => Command::Home,
        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_one_through_nine_select() {
        assert_eq!(parse_command("1"), Command::Select(1));
        assert_eq!(parse_command(" 9 "), Command::Select(9));
        assert_eq!(parse_command("5"), Command::Select(5));
    }

    #[test]
    fn zero_and_large_numbers_are_not_selections() {
        assert_eq!(parse_command("0"), Command::Unknown("0".to_string()));
        assert_eq!(parse_command("12"), Command::Unknown("12".to_string()));
    }

    #[test]
    fn text_commands_are_case_insensitive() {
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("HELP"), Command::Help);
        assert_eq!(parse_command("Inventory"), Command::Inventory);
        assert_eq!(parse_command("items"), Command::Inventory);
        assert_eq!(parse_command("BACK"), Command::Home);
        assert_eq!(parse_command("home"), Command::Home);
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(parse_command("look around"), Command::Unknown("look around".to_string()));
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
    }
}
