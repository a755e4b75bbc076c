//! Console commands
//!
//! Parses one line of console input into a cache command.

use std::str::FromStr;

use serde_json::Value;

use crate::error::CacheError;

/// One cache operation requested on the console.
///
/// # Grammar
/// - `set <key> <value...>` - value is JSON when it parses, otherwise raw text
/// - `get <key>`, `has <key>`, `del <key>` (or `delete`), `ttl <key>`
/// - `clear`, `prune`, `size`, `keys`, `stats`
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { key: String, value: Value },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
    Ttl { key: String },
    Clear,
    Prune,
    Size,
    Keys,
    Stats,
}

impl Command {
    /// Parses a console line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Result<Option<Self>, CacheError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CacheError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = split_word(line);
        let name = name.to_ascii_lowercase();

        match name.as_str() {
            "set" => {
                let (key, raw_value) = split_word(rest);
                let key = require_key(&name, key)?;
                if raw_value.is_empty() {
                    return Err(CacheError::InvalidCommand(
                        "set requires a value".to_string(),
                    ));
                }
                Ok(Command::Set {
                    key,
                    value: parse_value(raw_value),
                })
            }
            "get" => single_key(&name, rest).map(|key| Command::Get { key }),
            "has" => single_key(&name, rest).map(|key| Command::Has { key }),
            "del" | "delete" => single_key(&name, rest).map(|key| Command::Delete { key }),
            "ttl" => single_key(&name, rest).map(|key| Command::Ttl { key }),
            "clear" => no_args(&name, rest, Command::Clear),
            "prune" => no_args(&name, rest, Command::Prune),
            "size" => no_args(&name, rest, Command::Size),
            "keys" => no_args(&name, rest, Command::Keys),
            "stats" => no_args(&name, rest, Command::Stats),
            _ => Err(CacheError::InvalidCommand(format!(
                "unknown command '{}'",
                name
            ))),
        }
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn require_key(command: &str, key: &str) -> Result<String, CacheError> {
    if key.is_empty() {
        return Err(CacheError::InvalidCommand(format!(
            "{} requires a key",
            command
        )));
    }
    Ok(key.to_string())
}

fn single_key(command: &str, rest: &str) -> Result<String, CacheError> {
    let (key, extra) = split_word(rest);
    if !extra.is_empty() {
        return Err(CacheError::InvalidCommand(format!(
            "{} takes exactly one key",
            command
        )));
    }
    require_key(command, key)
}

fn no_args(command: &str, rest: &str, parsed: Command) -> Result<Command, CacheError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(CacheError::InvalidCommand(format!(
            "{} takes no arguments",
            command
        )))
    }
}

// Bare words are strings, so `set k hello world` needs no quoting
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
