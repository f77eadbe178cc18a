//! # Gate File Parser
//!
//! Turns gate text into a [`GateFile`]. The format is line oriented:
//!
//! ```text
//! 1 gate 100          <- header: ID, the literal "gate", TAG
//! landing             <- section: any non-indented line
//!   sword 3           <- item: space-indented "ID QUANTITY"
//!   shield 1
//!                     <- blank line closes the gate
//! 2 gate 200
//! ```
//!
//! Scanning is a three-state machine ([`State`]). Every raw line is first
//! classified ([`classify`]), then [`transition`] decides what to do with it
//! and which state comes next. Both are pure, so the indentation and
//! blank-line rules can be tested without building whole files.
//!
//! Only a leading ASCII space counts as indentation. A tab-led line is flush.
//!
//! Apart from reading the file in [`parse_file`] and [`parse_file_partial`],
//! this module does no I/O and no logging.

use crate::error::{Field, GateError, ParseError, Result};
use crate::model::{Gate, GateFile, Item, Section, GATE_KIND};
use std::fs;
use std::path::Path;

/// Shape of a single raw line, as far as the scanner cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Indented(&'a str),
    Flush(&'a str),
}

pub fn classify(raw: &str) -> Line<'_> {
    if raw.trim().is_empty() {
        Line::Blank
    } else if raw.starts_with(' ') {
        Line::Indented(raw)
    } else {
        Line::Flush(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    ExpectHeader,
    ExpectSection,
    ExpectItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Skip,
    OpenGate(&'a str),
    CloseGate,
    OpenSection(&'a str),
    CloseSection,
    AddItem(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<'a> {
    pub action: Action<'a>,
    pub next: State,
    /// False when the line must be looked at again in `next`.
    pub consume: bool,
}

impl<'a> Transition<'a> {
    fn consume(action: Action<'a>, next: State) -> Self {
        Self {
            action,
            next,
            consume: true,
        }
    }

    fn revisit(action: Action<'a>, next: State) -> Self {
        Self {
            action,
            next,
            consume: false,
        }
    }
}

pub fn transition(state: State, line: Line<'_>) -> Transition<'_> {
    use State::*;

    match (state, line) {
        (ExpectHeader, Line::Blank) => Transition::consume(Action::Skip, ExpectHeader),
        (ExpectHeader, Line::Indented(raw) | Line::Flush(raw)) => {
            Transition::consume(Action::OpenGate(raw), ExpectSection)
        }

        (ExpectSection, Line::Blank) => Transition::consume(Action::CloseGate, ExpectHeader),
        // Stray indented content with no open section is tolerated.
        (ExpectSection, Line::Indented(_)) => Transition::consume(Action::Skip, ExpectSection),
        (ExpectSection, Line::Flush(raw)) => {
            Transition::consume(Action::OpenSection(raw), ExpectItem)
        }

        (ExpectItem, Line::Indented(raw)) => Transition::consume(Action::AddItem(raw), ExpectItem),
        (ExpectItem, Line::Blank | Line::Flush(_)) => {
            Transition::revisit(Action::CloseSection, ExpectSection)
        }
    }
}

/// Accumulates records while the state machine runs.
struct Builder {
    file: GateFile,
    gate: Option<Gate>,
    section: Option<Section>,
}

impl Builder {
    fn new(path: &str) -> Self {
        Self {
            file: GateFile::new(path),
            gate: None,
            section: None,
        }
    }

    fn apply(&mut self, action: Action<'_>, line: usize) -> std::result::Result<(), ParseError> {
        match action {
            Action::Skip => {}
            Action::OpenGate(raw) => self.gate = Some(parse_header(raw, line)?),
            Action::CloseGate => self.close_gate(),
            Action::OpenSection(raw) => self.section = Some(Section::new(raw.trim())),
            Action::CloseSection => self.close_section(),
            Action::AddItem(raw) => {
                if let (Some(item), Some(section)) = (parse_item(raw, line)?, &mut self.section) {
                    section.items.push(item);
                }
            }
        }
        Ok(())
    }

    fn close_section(&mut self) {
        if let (Some(section), Some(gate)) = (self.section.take(), &mut self.gate) {
            gate.sections.push(section);
        }
    }

    fn close_gate(&mut self) {
        self.close_section();
        if let Some(gate) = self.gate.take() {
            self.file.gates.push(gate);
        }
    }

    fn finish(mut self) -> GateFile {
        self.close_gate();
        self.file
    }
}

fn parse_int(value: &str, field: Field, line: usize) -> std::result::Result<i64, ParseError> {
    value
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidInteger {
            line,
            field,
            value: value.to_string(),
            source,
        })
}

fn parse_header(raw: &str, line: usize) -> std::result::Result<Gate, ParseError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() < 3 || fields[1] != GATE_KIND {
        return Err(ParseError::MalformedHeader {
            line,
            content: raw.to_string(),
        });
    }

    let id = parse_int(fields[0], Field::GateId, line)?;
    let tag = parse_int(fields[2], Field::GateTag, line)?;
    Ok(Gate::new(id, fields[1], tag))
}

/// Lines with fewer than two fields carry no item and yield `None`.
fn parse_item(raw: &str, line: usize) -> std::result::Result<Option<Item>, ParseError> {
    let mut fields = raw.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(id), Some(quantity)) => {
            let quantity = parse_int(quantity, Field::ItemQuantity, line)?;
            Ok(Some(Item::new(id, quantity)))
        }
        _ => Ok(None),
    }
}

/// Parses `text`, returning whatever was assembled alongside the first error.
///
/// On error the returned file holds only the gates that were closed before the
/// failing line; it must not be trusted as a complete record.
pub fn parse_partial(path: &str, text: &str) -> (GateFile, Option<ParseError>) {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut builder = Builder::new(path);
    let mut state = State::ExpectHeader;
    let mut cursor = 0;

    while cursor < lines.len() {
        let step = transition(state, classify(lines[cursor]));
        if let Err(e) = builder.apply(step.action, cursor + 1) {
            return (builder.file, Some(e));
        }
        state = step.next;
        if step.consume {
            cursor += 1;
        }
    }

    (builder.finish(), None)
}

pub fn parse_str(path: &str, text: &str) -> std::result::Result<GateFile, ParseError> {
    match parse_partial(path, text) {
        (file, None) => Ok(file),
        (_, Some(e)) => Err(e),
    }
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| GateError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads and parses the gate file at `path`.
///
/// The file is decoded lossily, so stray non-UTF-8 bytes end up inside
/// section or item IDs rather than failing the read.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<GateFile> {
    let path = path.as_ref();
    let text = read_source(path)?;
    parse_str(&path.display().to_string(), &text).map_err(|source| GateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`parse_file`], but hands back the partial record with the parse error.
/// Only reading the file can fail outright.
pub fn parse_file_partial<P: AsRef<Path>>(path: P) -> Result<(GateFile, Option<ParseError>)> {
    let path = path.as_ref();
    let text = read_source(path)?;
    Ok(parse_partial(&path.display().to_string(), &text))
}
