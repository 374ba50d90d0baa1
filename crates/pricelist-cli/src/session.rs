//! Interactive search loop.
//!
//! The session reads a name fragment and four optional bounds per query,
//! prints the ranked matches, and stops when the exit word is entered or input
//! runs out at the name prompt.

use std::fmt;
use std::io::{self, BufRead, Write};

use pricelist_model::{Record, ValueError};
use pricelist_query::{Bounds, SearchQuery, search_ranked};
use thiserror::Error;
use tracing::debug;

use crate::listing::results_table;

/// Sentinel that ends a session unless configured otherwise.
pub const DEFAULT_EXIT_WORD: &str = "exit";

/// Which bound a prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    MinPrice,
    MaxPrice,
    MinWeight,
    MaxWeight,
}

impl BoundKind {
    pub const ALL: [BoundKind; 4] = [
        BoundKind::MinPrice,
        BoundKind::MaxPrice,
        BoundKind::MinWeight,
        BoundKind::MaxWeight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BoundKind::MinPrice => "minimum price",
            BoundKind::MaxPrice => "maximum price",
            BoundKind::MinWeight => "minimum weight",
            BoundKind::MaxWeight => "maximum weight",
        }
    }
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid {bound}: '{input}' is not a number")]
    InvalidBound { bound: BoundKind, input: String },

    #[error("input ended while reading the {bound}")]
    UnexpectedEof { bound: BoundKind },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Value(#[from] ValueError),
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The exit word was entered.
    ExitWord,
    /// Input closed at the name prompt.
    EndOfInput,
}

/// Parse one bound answer; blank input means no bound.
pub fn parse_bound(bound: BoundKind, input: &str) -> Result<Option<f64>, SessionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(SessionError::InvalidBound {
            bound,
            input: trimmed.to_string(),
        }),
    }
}

/// Interactive search over a loaded record set.
pub struct Session<'c, R, W> {
    records: &'c [Record],
    input: R,
    output: W,
    exit_word: String,
    queries: usize,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(records: &'c [Record], input: R, output: W) -> Self {
        Self {
            records,
            input,
            output,
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            queries: 0,
        }
    }

    #[must_use]
    pub fn with_exit_word(mut self, exit_word: impl Into<String>) -> Self {
        self.exit_word = exit_word.into();
        self
    }

    /// Number of queries answered so far.
    pub fn queries(&self) -> usize {
        self.queries
    }

    /// Run queries until the exit word or end of input.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        loop {
            let prompt = format!(
                "Product name fragment (or '{}' to finish): ",
                self.exit_word
            );
            let Some(fragment) = self.prompt(&prompt)? else {
                writeln!(self.output)?;
                return Ok(SessionEnd::EndOfInput);
            };
            if fragment.to_lowercase() == self.exit_word.to_lowercase() {
                return Ok(SessionEnd::ExitWord);
            }
            let query = self.read_bounds(fragment)?;
            self.answer(&query)?;
        }
    }

    fn read_bounds(&mut self, fragment: String) -> Result<SearchQuery, SessionError> {
        let mut values = [None; 4];
        for (slot, bound) in values.iter_mut().zip(BoundKind::ALL) {
            let prompt = format!("{} (leave empty for none): ", capitalize(bound.label()));
            let answer = self
                .prompt(&prompt)?
                .ok_or(SessionError::UnexpectedEof { bound })?;
            *slot = parse_bound(bound, &answer)?;
        }
        let [min_price, max_price, min_weight, max_weight] = values;
        Ok(SearchQuery::new(fragment)
            .with_price(Bounds::new(min_price, max_price))
            .with_weight(Bounds::new(min_weight, max_weight)))
    }

    fn answer(&mut self, query: &SearchQuery) -> Result<(), SessionError> {
        let ranked = search_ranked(self.records, query)?;
        self.queries += 1;
        debug!(query = self.queries, matched = ranked.len(), "query answered");
        if ranked.is_empty() {
            writeln!(self.output, "No products match your query.")?;
            writeln!(self.output, "You searched for: {}", query.name_fragment)?;
        } else {
            writeln!(self.output, "{}", results_table(&ranked))?;
        }
        Ok(())
    }

    /// Print `prompt` and read one line without its terminator; `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
