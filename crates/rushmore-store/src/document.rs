//! # Order Document
//!
//! Pure parsing and writing of the order file. No I/O happens here, so the
//! recovery policy is tested without touching a disk.
//!
//! ## Recovery Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  backend.load()        parse_document()   append      list       stats │
//! │  ──────────────        ────────────────   ──────      ────       ───── │
//! │  None              →   Missing            [new]       not yet    zero  │
//! │  invalid JSON      →   Corrupt            [new]       empty      Err   │
//! │  non-array JSON    →   Corrupt            [new]       empty      Err   │
//! │  invalid UTF-8     →   Corrupt            [new]       empty      Err   │
//! │  [ ... ]           →   Records(values)    [.., new]   records    stats │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are kept as `serde_json::Value` so a rewrite never drops or
//! reorders fields the current record type doesn't know about.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// Indentation of the written document.
const INDENT: &[u8] = b"    ";

/// What the backend held, after parsing.
#[derive(Debug)]
pub enum OrderDocument {
    /// Nothing stored yet.
    Missing,
    /// Something is stored but it is not a JSON array.
    Corrupt(serde_json::Error),
    /// A JSON array, elements untouched.
    Records(Vec<Value>),
}

impl OrderDocument {
    /// Records to build on when appending: a corrupt document counts as empty.
    pub fn into_records(self) -> Vec<Value> {
        match self {
            OrderDocument::Records(records) => records,
            OrderDocument::Missing | OrderDocument::Corrupt(_) => Vec::new(),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, OrderDocument::Corrupt(_))
    }
}

/// Classifies raw backend contents.
pub fn parse_document(bytes: Option<&[u8]>) -> OrderDocument {
    let Some(bytes) = bytes else {
        return OrderDocument::Missing;
    };

    match serde_json::from_slice::<Vec<Value>>(bytes) {
        Ok(records) => OrderDocument::Records(records),
        Err(err) => OrderDocument::Corrupt(err),
    }
}

/// Writes records as a JSON array indented by four spaces.
///
/// Non-ASCII text is written as UTF-8, not `\u` escapes.
pub fn render_document(records: &[Value]) -> StoreResult<Vec<u8>> {
    let mut out = Vec::with_capacity(256 * records.len().max(1));
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    records
        .serialize(&mut serializer)
        .map_err(StoreError::Serialize)?;
    Ok(out)
}
