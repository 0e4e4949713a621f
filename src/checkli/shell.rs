use checkli::index::ItemIndex;
use std::str::FromStr;

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    Toggle(ItemIndex),
    Delete(ItemIndex),
    /// `None` recommits the current name unchanged.
    Rename(ItemIndex, Option<String>),
    Hide(bool),
    /// `None` clears the search filter.
    Search(Option<String>),
    List,
    Help,
    Quit,
}

/// Parses one input line. The verb is case-insensitive; whatever follows
/// `add`, `search`, and `rename <n>` is taken verbatim, so multi-word names
/// need no quoting. A blank line just redraws the list.
pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(ShellCommand::List);
    }

    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    match verb.to_lowercase().as_str() {
        "add" | "a" => Ok(ShellCommand::Add(rest.to_string())),
        "check" | "toggle" | "c" | "x" => parse_index(rest).map(ShellCommand::Toggle),
        "delete" | "del" | "rm" => parse_index(rest).map(ShellCommand::Delete),
        "rename" | "mv" => {
            let (idx_str, name) = match rest.split_once(char::is_whitespace) {
                Some((idx_str, name)) => (idx_str, Some(name.trim().to_string())),
                None => (rest, None),
            };
            Ok(ShellCommand::Rename(parse_index(idx_str)?, name))
        }
        "hide" => parse_flag(rest).map(ShellCommand::Hide),
        "search" | "find" | "s" => Ok(ShellCommand::Search(if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        })),
        "list" | "ls" => Ok(ShellCommand::List),
        "help" | "h" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(format!("Unknown command: {} (try \"help\")", other)),
    }
}

fn parse_index(s: &str) -> Result<ItemIndex, String> {
    if s.is_empty() {
        return Err("Missing item index".to_string());
    }
    ItemIndex::from_str(s)
}

fn parse_flag(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(format!("Expected \"on\" or \"off\", got: {:?}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(n: usize) -> ItemIndex {
        ItemIndex::from_str(&n.to_string()).unwrap()
    }

    #[test]
    fn parses_add_with_the_raw_remainder() {
        assert_eq!(
            parse_line("add almond milk"),
            Ok(ShellCommand::Add("almond milk".to_string()))
        );
        assert_eq!(parse_line("a kale"), Ok(ShellCommand::Add("kale".into())));
        // an empty remainder adds an empty name
        assert_eq!(parse_line("add"), Ok(ShellCommand::Add(String::new())));
    }

    #[test]
    fn parses_index_commands_and_aliases() {
        assert_eq!(parse_line("check 3"), Ok(ShellCommand::Toggle(index(3))));
        assert_eq!(parse_line("toggle 1"), Ok(ShellCommand::Toggle(index(1))));
        assert_eq!(parse_line("x 2"), Ok(ShellCommand::Toggle(index(2))));
        assert_eq!(parse_line("delete 4"), Ok(ShellCommand::Delete(index(4))));
        assert_eq!(parse_line("rm 4"), Ok(ShellCommand::Delete(index(4))));
    }

    #[test]
    fn parses_rename_with_and_without_a_name() {
        assert_eq!(
            parse_line("rename 2 blood oranges"),
            Ok(ShellCommand::Rename(index(2), Some("blood oranges".into())))
        );
        assert_eq!(
            parse_line("rename 2"),
            Ok(ShellCommand::Rename(index(2), None))
        );
    }

    #[test]
    fn parses_filters() {
        assert_eq!(parse_line("hide on"), Ok(ShellCommand::Hide(true)));
        assert_eq!(parse_line("hide OFF"), Ok(ShellCommand::Hide(false)));
        assert!(parse_line("hide maybe").is_err());
        assert!(parse_line("hide").is_err());

        assert_eq!(
            parse_line("search milk"),
            Ok(ShellCommand::Search(Some("milk".into())))
        );
        assert_eq!(parse_line("search"), Ok(ShellCommand::Search(None)));
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse_line("ADD kale"), Ok(ShellCommand::Add("kale".into())));
        assert_eq!(parse_line("Quit"), Ok(ShellCommand::Quit));
    }

    #[test]
    fn blank_lines_redraw() {
        assert_eq!(parse_line(""), Ok(ShellCommand::List));
        assert_eq!(parse_line("   \n"), Ok(ShellCommand::List));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_line("check").is_err());
        assert!(parse_line("check zero").is_err());
        assert!(parse_line("check 0").is_err());
        assert!(parse_line("frobnicate 1").is_err());
    }
}
