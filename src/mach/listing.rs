use crate::lang::{self, ast::Statement, Error, LineNumber};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// A stored program line. The source text, the line number as typed
/// and the parsed statement only ever exist together.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    literal: String,
    source: String,
    statement: Statement,
}

impl Entry {
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.literal, self.source)
    }
}

/// The program store, ordered by line number.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, Entry>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Parse `source` and store it under `number`, replacing any prior
    /// entry. The text is kept as given for listing. Nothing changes if
    /// it does not parse.
    pub fn insert(
        &mut self,
        number: LineNumber,
        literal: &str,
        source: &str,
    ) -> Result<Option<Entry>, Error> {
        let statement = lang::parse(source.trim()).map_err(|e| e.in_line_number(number))?;
        let entry = Entry {
            literal: literal.to_string(),
            source: source.to_string(),
            statement,
        };
        Ok(self.source.insert(number, entry))
    }

    pub fn remove(&mut self, ln: LineNumber) -> Option<Entry> {
        self.source.remove(&ln)
    }

    pub fn contains(&self, ln: LineNumber) -> bool {
        self.source.contains_key(&ln)
    }

    pub fn source(&self, ln: LineNumber) -> Option<&str> {
        self.source.get(&ln).map(Entry::source)
    }

    pub fn statement(&self, ln: LineNumber) -> Option<&Statement> {
        self.source.get(&ln).map(Entry::statement)
    }

    pub fn first_line(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    /// The smallest stored line number strictly greater than `ln`.
    pub fn next_line(&self, ln: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(ln), Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.source.values().map(|entry| entry.to_string())
    }
}
