use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook", bin_name = "abook", version)]
#[command(about = "Console address book with birthdays and tagged notes", long_about = None)]
pub struct Cli {
    /// Directory holding contacts.json, notes.json and config.json
    /// (defaults to $ABOOK_HOME, then the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub const WELCOME: &str = "Welcome to the assistant bot!";

/// (usage, description) pairs, in the order `help` prints them.
pub const COMMANDS: &[(&str, &str)] = &[
    ("hello", "greet the bot"),
    ("help", "show this list"),
    ("add <name> <phone>", "add a contact, or replace it"),
    ("change <name> <phone>", "change a contact's phone"),
    ("phone <name>", "show a contact's phone"),
    ("all", "list every contact"),
    ("find <query>", "search contacts (3+ characters)"),
    ("delete <name>", "delete a contact"),
    ("edit <name>", "edit a contact field by field"),
    ("add-birthday <name> <DD.MM.YYYY>", "set a birthday"),
    ("show-birthday <name>", "show a birthday"),
    ("birthdays", "birthdays in the next 7 days"),
    ("upcoming-birthday <days>", "birthdays exactly <days> from today"),
    ("add-address <name> <address...>", "set an address"),
    ("change-address <name> <address...>", "change an address"),
    ("show-address <name>", "show an address"),
    ("add-email <name> <email>", "set an email"),
    ("change-email <name> <email>", "change an email"),
    ("show-email <name>", "show an email"),
    ("add-note <note> <text...>", "add a note, or replace it"),
    ("add-tags <note> <tags...>", "append tags to a note"),
    ("edit-note <note> <text...>", "replace a note's text"),
    ("delete-note <note>", "delete a note"),
    ("find-note <note>", "show a note"),
    ("find-by-tag <tag>", "notes carrying a tag"),
    ("show-sorted-notes", "notes, most tagged first"),
    ("close | exit", "leave"),
];

pub fn command_list() -> String {
    let mut output = String::from("Available commands:\n");
    for (usage, about) in COMMANDS {
        output.push_str(&format!("  {:<38} {}\n", usage, about));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_dir_and_verbose() {
        let cli = Cli::try_parse_from(["abook", "--data-dir", "/tmp/ab", "-v"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/ab")));
        assert!(cli.verbose);
    }

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["abook"]).unwrap();
        assert!(cli.data_dir.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn command_list_mentions_every_keyword() {
        let list = command_list();
        for keyword in ["add-birthday", "upcoming-birthday", "show-sorted-notes", "close"] {
            assert!(list.contains(keyword), "missing {keyword}");
        }
    }
}
