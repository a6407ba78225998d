//! Interactive prompt line parsing

use crate::types::Command;

/// What a single prompt line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum PromptLine {
    /// Nothing to do (blank line)
    Empty,

    /// End the session
    Exit,

    Command(Command),
}

/// Parse one line typed at the prompt
///
/// The action is the first whitespace-separated word; the rest of the line is
/// its argument.
pub fn parse_prompt_line(line: &str) -> Result<PromptLine, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(PromptLine::Empty);
    }

    let (action, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((action, rest)) => (action, Some(rest)),
        None => (trimmed, None),
    };

    match action.to_lowercase().as_str() {
        "exit" | "quit" => Ok(PromptLine::Exit),
        _ => Command::parse(action, rest).map(PromptLine::Command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountKind;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::blank("   ", PromptLine::Empty)]
    #[case::exit("exit", PromptLine::Exit)]
    #[case::quit("QUIT", PromptLine::Exit)]
    #[case::deposit("deposit 250", PromptLine::Command(Command::Deposit(Decimal::new(250, 0))))]
    #[case::tab_separated("withdraw\t12.5", PromptLine::Command(Command::Withdraw(Decimal::new(125, 1))))]
    #[case::select("select   current", PromptLine::Command(Command::Select(AccountKind::Current)))]
    #[case::balance("balance", PromptLine::Command(Command::Balance))]
    fn test_parse_prompt_line(#[case] line: &str, #[case] expected: PromptLine) {
        assert_eq!(parse_prompt_line(line), Ok(expected));
    }

    #[test]
    fn test_parse_prompt_line_reports_command_errors() {
        let error = parse_prompt_line("deposit").unwrap_err();
        assert!(error.contains("requires an amount"));
    }
}
