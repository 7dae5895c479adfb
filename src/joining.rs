//! Contextual joining of Arabic letters.
//!
//! A single pass over a line in logical order picks the positional form of each letter
//! from the letter that follows it and whether the letter before it joins forward.
//! Transparent marks are skipped when looking for the following letter and are never
//! rewritten. Lines are shaped in place and keep their length.

use crate::forms::{self, PositionalForm, ShapeEntry};
use crate::transparent;

/// The data the joining pass consults for each codepoint.
pub trait JoiningData {
    /// Positional forms of `ch`, or `ShapeEntry::NONE` if it has none.
    fn lookup(&self, ch: u32) -> &ShapeEntry;

    /// Whether `ch` is skipped when looking for the next letter.
    fn is_transparent(&self, ch: u32) -> bool;
}

/// The built-in Arabic shape table and transparent marks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Arabic;

impl JoiningData for Arabic {
    fn lookup(&self, ch: u32) -> &ShapeEntry {
        forms::lookup(ch)
    }

    fn is_transparent(&self, ch: u32) -> bool {
        transparent::is_transparent(ch)
    }
}

#[derive(Default)]
struct JoinState {
    // The previous letter offered a forward join that the current letter accepted.
    joins_previous: bool,
}

impl JoinState {
    /// Pick the form of `current`, then record whether it joins on to `next`.
    fn advance(&mut self, current: &ShapeEntry, next: &ShapeEntry) -> Option<PositionalForm> {
        let form = if self.joins_previous && next.fina != 0 && current.medi != 0 {
            Some(PositionalForm::Medial)
        } else if next.fina != 0 && current.init != 0 {
            Some(PositionalForm::Initial)
        } else if self.joins_previous && current.fina != 0 {
            Some(PositionalForm::Final)
        } else if current.isol != 0 {
            Some(PositionalForm::Isolated)
        } else {
            None
        };

        self.joins_previous = current.init != 0 && next.fina != 0;
        form
    }
}

/// Index of the first non-transparent codepoint at or after `start`, or `line.len()`.
fn next_letter<D: JoiningData + ?Sized>(data: &D, line: &[u32], start: usize) -> usize {
    line.get(start..)
        .and_then(|rest| rest.iter().position(|&ch| !data.is_transparent(ch)))
        .map_or(line.len(), |offset| start + offset)
}

fn next_entry<'a, D: JoiningData + ?Sized>(data: &'a D, line: &[u32], i: usize) -> &'a ShapeEntry {
    match line.get(i) {
        Some(&ch) => data.lookup(ch),
        None => &ShapeEntry::NONE,
    }
}

/// Shape `line` in place using the built-in Arabic data.
pub fn shape_line(line: &mut [u32]) {
    shape_line_with(&Arabic, line)
}

/// Shape `line` in place using `data`.
pub fn shape_line_with<D: JoiningData + ?Sized>(data: &D, line: &mut [u32]) {
    let mut state = JoinState::default();
    let mut i = 0;

    while i < line.len() {
        let next = next_letter(data, line, i + 1);
        let current = data.lookup(line[i]);
        let form = state.advance(current, next_entry(data, line, next));

        if let Some(ch) = form.and_then(|form| current.form(form)) {
            line[i] = ch;
        }
        i = next;
    }
}

/// The form `shape_line_with` would give each position of `line`.
///
/// Positions holding transparent marks, and letters with no forms, are `None`.
pub fn resolve_forms_with<D: JoiningData + ?Sized>(
    data: &D,
    line: &[u32],
) -> Vec<Option<PositionalForm>> {
    let mut resolved = vec![None; line.len()];
    let mut state = JoinState::default();
    let mut i = 0;

    while i < line.len() {
        let next = next_letter(data, line, i + 1);
        resolved[i] = state.advance(data.lookup(line[i]), next_entry(data, line, next));
        i = next;
    }

    resolved
}

/// Shape a line of `char`s in place using the built-in Arabic data.
pub fn shape_chars(line: &mut [char]) {
    let mut codepoints = line.iter().map(|&ch| u32::from(ch)).collect::<Vec<_>>();
    shape_line(&mut codepoints);

    for (ch, cp) in line.iter_mut().zip(codepoints) {
        if let Some(shaped) = char::from_u32(cp) {
            *ch = shaped;
        }
    }
}

/// Shape `text` using the built-in Arabic data.
///
/// Line breaks have no positional forms so each line of `text` shapes independently.
pub fn shape_str(text: &str) -> String {
    let mut chars = text.chars().collect::<Vec<_>>();
    shape_chars(&mut chars);
    chars.into_iter().collect()
}
