use abook::api::{CmdMessage, MessageLevel};
use abook::error::AbookError;
use colored::*;
use std::io::{self, Write};

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, err: &AbookError) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(err.to_string())])
}

pub fn print_plain<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text)
}

pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}
