//! The read-eval-print loop.
//!
//! One line in, one command out. The first token is the command keyword
//! (case-insensitive), the rest are its arguments. Every failure becomes a
//! printed message; only `close`/`exit` or end of input stop the loop.

use super::edit;
use super::render::{print_error, print_messages, print_plain, prompt};
use super::setup::command_list;
use abook::api::AbookApi;
use abook::commands::CmdResult;
use abook::error::{AbookError, ErrorKind, Result};
use abook::store::SnapshotStore;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Enter a command: ";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const EMPTY_INPUT: &str = "Please enter a command.";
pub const GOODBYE: &str = "Good bye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Splits a line into a lowercased keyword and its arguments.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?.to_lowercase();
    Some((keyword, tokens.collect()))
}

fn no_args(args: &[&str]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(AbookError::WrongArgCount)
    }
}

fn one<'a>(args: &[&'a str]) -> Result<&'a str> {
    match args {
        [a] => Ok(a),
        _ => Err(AbookError::WrongArgCount),
    }
}

fn two<'a>(args: &[&'a str]) -> Result<(&'a str, &'a str)> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(AbookError::WrongArgCount),
    }
}

fn name_and_words<'a, 'b>(args: &'b [&'a str]) -> Result<(&'a str, &'b [&'a str])> {
    match args {
        [name, rest @ ..] if !rest.is_empty() => Ok((name, rest)),
        _ => Err(AbookError::WrongArgCount),
    }
}

pub struct Session<S: SnapshotStore> {
    pub api: AbookApi<S>,
    clock: fn() -> NaiveDate,
}

impl<S: SnapshotStore> Session<S> {
    pub fn new(api: AbookApi<S>, clock: fn() -> NaiveDate) -> Self {
        Self { api, clock }
    }

    /// Runs until `close`/`exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        loop {
            prompt(out, PROMPT)?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            if self.handle_line(&line, input, out)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    pub fn handle_line<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Flow> {
        let Some((keyword, args)) = parse_input(line) else {
            print_plain(out, EMPTY_INPUT)?;
            return Ok(Flow::Continue);
        };

        match keyword.as_str() {
            "close" | "exit" => {
                print_plain(out, GOODBYE)?;
                return Ok(Flow::Exit);
            }
            "hello" => print_plain(out, "How can I help you?")?,
            "help" => write!(out, "{}", command_list())?,
            _ => match self.dispatch(&keyword, &args, input, out) {
                Some(Ok(result)) => print_messages(out, &result.messages)?,
                Some(Err(err)) => {
                    if err.kind() == ErrorKind::Internal {
                        tracing::error!(command = %keyword, error = %err, "command failed");
                    }
                    print_error(out, &err)?;
                }
                None => print_plain(out, INVALID_COMMAND)?,
            },
        }
        Ok(Flow::Continue)
    }

    /// `None` means the keyword is unknown.
    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        keyword: &str,
        args: &[&str],
        input: &mut R,
        out: &mut W,
    ) -> Option<Result<CmdResult>> {
        let today = self.clock;
        let api = &mut self.api;
        let result = match keyword {
            "add" => two(args).and_then(|(name, phone)| api.add_phone(name, phone)),
            "change" => two(args).and_then(|(name, phone)| api.change_phone(name, phone)),
            "phone" => one(args).and_then(|name| api.get_phone(name)),
            "all" => no_args(args).and_then(|_| api.list_contacts()),
            "find" => one(args).and_then(|query| api.find_contacts(query)),
            "delete" => one(args).and_then(|name| api.delete_contact(name)),
            "edit" => one(args).and_then(|name| edit::run(api, name, input, out)),
            "add-birthday" => two(args).and_then(|(name, date)| api.add_birthday(name, date)),
            "show-birthday" => one(args).and_then(|name| api.show_birthday(name)),
            "birthdays" => no_args(args).and_then(|_| api.upcoming_birthdays(today())),
            "upcoming-birthday" => {
                one(args).and_then(|days| api.birthdays_in(today(), days))
            }
            "add-address" => {
                name_and_words(args).and_then(|(name, words)| api.add_address(name, words))
            }
            "change-address" => {
                name_and_words(args).and_then(|(name, words)| api.change_address(name, words))
            }
            "show-address" => one(args).and_then(|name| api.show_address(name)),
            "add-email" => two(args).and_then(|(name, email)| api.add_email(name, email)),
            "change-email" => two(args).and_then(|(name, email)| api.change_email(name, email)),
            "show-email" => one(args).and_then(|name| api.show_email(name)),
            "add-note" => name_and_words(args).and_then(|(name, words)| api.add_note(name, words)),
            "add-tags" => name_and_words(args).and_then(|(name, tags)| api.add_tags(name, tags)),
            "edit-note" => {
                name_and_words(args).and_then(|(name, words)| api.edit_note(name, words))
            }
            "delete-note" => one(args).and_then(|name| api.delete_note(name)),
            "find-note" => one(args).and_then(|name| api.find_note(name)),
            "find-by-tag" => one(args).and_then(|tag| api.find_notes_by_tag(tag)),
            "show-sorted-notes" => no_args(args).and_then(|_| api.sorted_notes()),
            _ => return None,
        };
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abook::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn fixed_monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn session() -> Session<InMemoryStore> {
        colored::control::set_override(false);
        Session::new(
            AbookApi::open(InMemoryStore::new()).unwrap(),
            fixed_monday,
        )
    }

    /// Feeds `script` through a fresh session and returns everything printed.
    fn run_script(session: &mut Session<InMemoryStore>, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        session.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_input_lowercases_keyword_only() {
        let (keyword, args) = parse_input("  ADD Bob 1234567891 ").unwrap();
        assert_eq!(keyword, "add");
        assert_eq!(args, vec!["Bob", "1234567891"]);
        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut s = session();
        let out = run_script(&mut s, "hello\nexit\nadd Bob 1234567891\n");
        assert!(out.contains("How can I help you?"));
        assert!(out.contains(GOODBYE));
        assert!(s.api.contacts().is_empty());
    }

    #[test]
    fn bad_input_never_ends_the_session() {
        let mut s = session();
        let out = run_script(
            &mut s,
            "\nfrobnicate\nadd Bob\nphone Ghost\nadd Bob 123\nadd Bob 1234567891\nphone Bob\n",
        );
        assert!(out.contains(EMPTY_INPUT));
        assert!(out.contains(INVALID_COMMAND));
        assert!(out.contains("Please use correct number of arguments"));
        assert!(out.contains("Name is not present: Ghost"));
        assert!(out.contains("Phone: 123 is not correct it should contain 10 digits"));
        assert!(out.ends_with("1234567891\nEnter a command: \n"));
    }

    #[test]
    fn address_and_notes_take_many_words() {
        let mut s = session();
        let out = run_script(
            &mut s,
            "add Bob 1234567891\n\
             add-address Bob 221B Baker Street\n\
             show-address Bob\n\
             add-note plan buy a cake\n\
             add-tags plan party food\n\
             find-note plan\n",
        );
        assert!(out.contains("221B Baker Street\n"));
        assert!(out.contains("Note: plan, tags: party food, text: buy a cake"));
    }

    #[test]
    fn birthday_queries_use_the_session_clock() {
        let mut s = session();
        let out = run_script(
            &mut s,
            "add Ann 1234567891\n\
             add-birthday Ann 06.01.1990\n\
             birthdays\n\
             upcoming-birthday 5\n\
             upcoming-birthday soon\n",
        );
        assert!(out.contains("Monday: Ann"));
        assert!(out.contains("Birthdays on 06.01.2024: Ann"));
        assert!(out.contains("Please use a whole number of days, instead of soon"));
    }

    #[test]
    fn re_adding_a_contact_prints_a_warning() {
        let mut s = session();
        let out = run_script(&mut s, "add Bob 1234567891\nadd Bob 9876543219\n");
        assert!(out.contains("Contact: Bob : 9876543219 added\nContact Bob already existed and was replaced\n"));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let mut s = session();
        let out = run_script(&mut s, "ADD Bob 1234567891\nAll\n");
        assert!(out.contains("Contact name: Bob, phone: 1234567891"));
    }
}
