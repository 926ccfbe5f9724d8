//! Interactive `edit <name>` flow: pick a field, type the new value.

use super::render::{print_plain, prompt};
use abook::api::AbookApi;
use abook::commands::{CmdMessage, CmdResult};
use abook::error::{AbookError, Result};
use abook::store::SnapshotStore;
use std::io::{BufRead, Write};

pub const MENU: &str = "What do you want to edit?\n  1. phone\n  2. birthday\n  3. address\n  4. email\n  5. cancel";
pub const CANCELLED: &str = "Edit cancelled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Phone,
    Birthday,
    Address,
    Email,
}

impl Field {
    fn parse(choice: &str) -> Option<Option<Field>> {
        match choice.trim().to_lowercase().as_str() {
            "1" | "phone" => Some(Some(Field::Phone)),
            "2" | "birthday" => Some(Some(Field::Birthday)),
            "3" | "address" => Some(Some(Field::Address)),
            "4" | "email" => Some(Some(Field::Email)),
            "" | "5" | "cancel" => Some(None),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Phone => "phone",
            Field::Birthday => "birthday (DD.MM.YYYY)",
            Field::Address => "address",
            Field::Email => "email",
        }
    }
}

/// Reads one line, `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn cancelled() -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::info(CANCELLED)))
}

pub fn run<S, R, W>(api: &mut AbookApi<S>, name: &str, input: &mut R, out: &mut W) -> Result<CmdResult>
where
    S: SnapshotStore,
    R: BufRead,
    W: Write,
{
    api.record(name)?;

    print_plain(out, MENU)?;
    prompt(out, "Choose a field: ")?;
    let Some(choice) = read_answer(input)? else {
        return cancelled();
    };
    let field = match Field::parse(&choice) {
        Some(Some(field)) => field,
        Some(None) => return cancelled(),
        None => return Err(AbookError::Usage(format!("Unknown field: {}", choice))),
    };

    prompt(out, &format!("New {}: ", field.label()))?;
    let Some(value) = read_answer(input)? else {
        return cancelled();
    };

    match field {
        Field::Phone => api.change_phone(name, &value),
        Field::Birthday => api.add_birthday(name, &value),
        Field::Address => {
            let words: Vec<&str> = value.split_whitespace().collect();
            api.change_address(name, &words)
        }
        Field::Email => api.change_email(name, &value),
    }
}
