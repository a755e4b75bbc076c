//! Session Handlers
//!
//! Executes console commands against one owned cache.

use std::io::{BufRead, Write};

use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{BoundedCache, Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::models::{Command, Response};

/// One console session and the cache it owns.
#[derive(Debug)]
pub struct Session<C = SystemClock> {
    cache: BoundedCache<String, Value, C>,
}

impl Session<SystemClock> {
    /// Creates a session with a wall-clock cache built from `config`.
    pub fn from_config(config: CacheConfig) -> Result<Self> {
        BoundedCache::new(config).map(Self::new)
    }
}

impl<C: Clock> Session<C> {
    /// Creates a session around an existing cache.
    pub fn new(cache: BoundedCache<String, Value, C>) -> Self {
        Self { cache }
    }

    /// Read access to the underlying cache.
    pub fn cache(&self) -> &BoundedCache<String, Value, C> {
        &self.cache
    }

    /// Executes one parsed command.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Set { key, value } => {
                let stored = self.cache.set(key.clone(), value);
                Response::Set { key, stored }
            }
            Command::Get { key } => {
                let value = self.cache.get(&key).cloned();
                Response::get(key, value)
            }
            Command::Has { key } => Response::Has {
                present: self.cache.has(&key),
                key,
            },
            Command::Delete { key } => Response::Delete {
                removed: self.cache.delete(&key),
                key,
            },
            Command::Ttl { key } => Response::Ttl {
                remaining_ms: self.cache.remaining_ttl_ms(&key),
                key,
            },
            Command::Clear => {
                self.cache.clear();
                Response::Clear
            }
            Command::Prune => Response::Prune {
                removed: self.cache.prune(),
            },
            Command::Size => Response::Size {
                size: self.cache.len(),
            },
            Command::Keys => Response::Keys {
                keys: self.cache.keys().cloned().collect(),
            },
            Command::Stats => Response::Stats(self.cache.stats()),
        }
    }

    /// Parses and executes one input line.
    ///
    /// Returns None for blank lines and comments. Parse failures become
    /// error responses so the session can continue.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        match Command::parse_line(line) {
            Ok(Some(command)) => {
                debug!(?command, "executing command");
                Some(self.execute(command))
            }
            Ok(None) => None,
            Err(err) => {
                warn!("{}", err);
                Some(Response::error(err))
            }
        }
    }

    /// Processes `input` line by line until EOF, writing one JSON line per
    /// response.
    ///
    /// Returns the number of commands answered.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut answered = 0;
        for line in input.lines() {
            let line = line?;
            if let Some(response) = self.handle_line(&line) {
                writeln!(output, "{}", response.to_json_line())?;
                answered += 1;
            }
        }
        output.flush()?;
        Ok(answered)
    }
}
