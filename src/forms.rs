//! Positional glyph forms of Arabic letters.
//!
//! Each letter maps to up to four presentation-form codepoints, one per position in a
//! cursively joined word. A form of `0` means the letter has no such form.

use std::collections::hash_map::Entry;

use lazy_static::lazy_static;
use log::debug;
use rustc_hash::FxHashMap;

use crate::error::TableError;

/// The position a letter occupies within a joined run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PositionalForm {
    /// Joins on neither side.
    Isolated,
    /// Joins to the preceding letter only.
    Final,
    /// Joins on both sides.
    Medial,
    /// Joins to the following letter only.
    Initial,
}

/// The glyph repertoire of one base letter.
///
/// Field names follow the OpenType positional feature tags.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ShapeEntry {
    pub base: u32,
    pub isol: u32,
    pub fina: u32,
    pub medi: u32,
    pub init: u32,
}

impl ShapeEntry {
    /// The entry for codepoints that have no positional forms.
    pub const NONE: ShapeEntry = ShapeEntry::new(0, 0, 0, 0, 0);

    pub const fn new(base: u32, isol: u32, fina: u32, medi: u32, init: u32) -> Self {
        ShapeEntry {
            base,
            isol,
            fina,
            medi,
            init,
        }
    }

    /// Returns the codepoint of `form`, or `None` if the letter lacks it.
    pub fn form(&self, form: PositionalForm) -> Option<u32> {
        let ch = match form {
            PositionalForm::Isolated => self.isol,
            PositionalForm::Final => self.fina,
            PositionalForm::Medial => self.medi,
            PositionalForm::Initial => self.init,
        };
        (ch != 0).then_some(ch)
    }

    /// Returns true if the letter can join to a preceding letter.
    pub fn joins_backward(&self) -> bool {
        self.fina != 0
    }

    /// Returns true if the letter can join to a following letter.
    pub fn joins_forward(&self) -> bool {
        self.init != 0
    }

    fn codepoints(&self) -> [u32; 5] {
        [self.base, self.isol, self.fina, self.medi, self.init]
    }
}

const fn row(base: u32, isol: u32, fina: u32, medi: u32, init: u32) -> ShapeEntry {
    ShapeEntry::new(base, isol, fina, medi, init)
}

/// Built-in rows in table order: base, isolated, final, medial, initial.
pub static ARABIC_FORMS: &[ShapeEntry] = &[
    row(0x0621, 0xFE80, 0x0000, 0x0000, 0x0000),
    row(0x0622, 0xFE81, 0xFE82, 0x0000, 0x0000),
    row(0x0623, 0xFE83, 0xFE84, 0x0000, 0x0000),
    row(0x0624, 0xFE85, 0xFE86, 0x0000, 0x0000),
    row(0x0625, 0xFE87, 0xFE88, 0x0000, 0x0000),
    row(0x0626, 0xFE89, 0xFE8A, 0xFE8C, 0xFE8B),
    row(0x0627, 0xFE8D, 0xFE8E, 0x0000, 0x0000),
    row(0x0628, 0xFE8F, 0xFE90, 0xFE92, 0xFE91),
    row(0x0629, 0xFE93, 0xFE94, 0x0000, 0x0000),
    row(0x062A, 0xFE95, 0xFE96, 0xFE98, 0xFE97),
    row(0x062B, 0xFE99, 0xFE9A, 0xFE9C, 0xFE9B),
    row(0x062C, 0xFE9D, 0xFE9E, 0xFEA0, 0xFE9F),
    row(0x062D, 0xFEA1, 0xFEA2, 0xFEA4, 0xFEA3),
    row(0x062E, 0xFEA5, 0xFEA6, 0xFEA8, 0xFEA7),
    row(0x062F, 0xFEA9, 0xFEAA, 0x0000, 0x0000),
    row(0x0630, 0xFEAB, 0xFEAC, 0x0000, 0x0000),
    row(0x0631, 0xFEAD, 0xFEAE, 0x0000, 0x0000),
    row(0x0632, 0xFEAF, 0xFEB0, 0x0000, 0x0000),
    row(0x0633, 0xFEB1, 0xFEB2, 0xFEB4, 0xFEB3),
    row(0x0634, 0xFEB5, 0xFEB6, 0xFEB8, 0xFEB7),
    row(0x0635, 0xFEB9, 0xFEBA, 0xFEBC, 0xFEBB),
    row(0x0636, 0xFEBD, 0xFEBE, 0xFEC0, 0xFEBF),
    row(0x0637, 0xFEC1, 0xFEC2, 0xFEC4, 0xFEC3),
    row(0x0638, 0xFEC5, 0xFEC6, 0xFEC8, 0xFEC7),
    row(0x0639, 0xFEC9, 0xFECA, 0xFECC, 0xFECB),
    row(0x063A, 0xFECD, 0xFECE, 0xFED0, 0xFECF),

    row(0x0640, 0x0640, 0x0640, 0x0640, 0x0640),
    row(0x0641, 0xFED1, 0xFED2, 0xFED4, 0xFED3),
    row(0x0642, 0xFED5, 0xFED6, 0xFED8, 0xFED7),
    row(0x0643, 0xFED9, 0xFEDA, 0xFEDC, 0xFEDB),
    row(0x0644, 0xFEDD, 0xFEDE, 0xFEE0, 0xFEDF),
    row(0x0645, 0xFEE1, 0xFEE2, 0xFEE4, 0xFEE3),
    row(0x0646, 0xFEE5, 0xFEE6, 0xFEE8, 0xFEE7),
    row(0x0647, 0xFEE9, 0xFEEA, 0xFEEC, 0xFEEB),
    row(0x0648, 0xFEED, 0xFEEE, 0x0000, 0x0000),
    row(0x0649, 0xFEEF, 0xFEF0, 0x0000, 0x0000),
    row(0x064A, 0xFEF1, 0xFEF2, 0xFEF4, 0xFEF3),

    row(0x0671, 0xFB50, 0x0000, 0x0000, 0x0000),
    row(0x0672, 0x0672, 0x0672, 0x0000, 0x0000),
    row(0x0673, 0x0673, 0x0673, 0x0000, 0x0000),
    row(0x0674, 0x0674, 0x0000, 0x0000, 0x0000),
    row(0x0675, 0x0675, 0x0675, 0x0000, 0x0000),
    row(0x0676, 0x0676, 0x0676, 0x0000, 0x0000),
    row(0x0677, 0xFBDD, 0x0677, 0x0000, 0x0000),
    row(0x0678, 0x0678, 0x0678, 0x0678, 0x0678),
    row(0x0679, 0xFB66, 0xFB67, 0xFB69, 0xFB68),
    row(0x067A, 0xFB5E, 0xFB5F, 0xFB61, 0xFB60),
    row(0x067B, 0xFB52, 0xFB53, 0xFB55, 0xFB54),
    row(0x067C, 0x067C, 0x067C, 0x067C, 0x067C),
    row(0x067D, 0x067D, 0x067D, 0x067D, 0x067D),
    row(0x067E, 0xFB56, 0xFB57, 0xFB59, 0xFB58),
    row(0x067F, 0xFB62, 0xFB63, 0xFB65, 0xFB64),
    row(0x0680, 0xFB5A, 0xFB5B, 0xFB5D, 0xFB5C),
    row(0x0681, 0x0681, 0x0681, 0x0681, 0x0681),
    row(0x0682, 0x0682, 0x0682, 0x0682, 0x0682),
    row(0x0683, 0xFB76, 0xFB77, 0xFB79, 0xFB78),
    row(0x0684, 0xFB72, 0xFB73, 0xFB75, 0xFB74),
    row(0x0685, 0x0685, 0x0685, 0x0685, 0x0685),
    row(0x0686, 0xFB7A, 0xFB7B, 0xFB7D, 0xFB7C),
    row(0x0687, 0xFB7E, 0xFB7F, 0xFB81, 0xFB80),
    row(0x0688, 0xFB88, 0xFB89, 0x0000, 0x0000),
    row(0x0689, 0x0689, 0x0689, 0x0000, 0x0000),
    row(0x068A, 0x068A, 0x068A, 0x0000, 0x0000),
    row(0x068B, 0x068B, 0x068B, 0x0000, 0x0000),
    row(0x068C, 0xFB84, 0xFB85, 0x0000, 0x0000),
    row(0x068D, 0xFB82, 0xFB83, 0x0000, 0x0000),
    row(0x068E, 0xFB86, 0xFB87, 0x0000, 0x0000),
    row(0x068F, 0x068F, 0x068F, 0x0000, 0x0000),
    row(0x0690, 0x0690, 0x0690, 0x0000, 0x0000),
    row(0x0691, 0xFB8C, 0xFB8D, 0x0000, 0x0000),
    row(0x0692, 0x0692, 0x0692, 0x0000, 0x0000),
    row(0x0693, 0x0693, 0x0693, 0x0000, 0x0000),
    row(0x0694, 0x0694, 0x0694, 0x0000, 0x0000),
    row(0x0695, 0x0695, 0x0695, 0x0000, 0x0000),
    row(0x0696, 0x0695, 0x0696, 0x0000, 0x0000),
    row(0x0697, 0x0697, 0x0697, 0x0000, 0x0000),
    row(0x0698, 0xFB8A, 0xFB8B, 0x0000, 0x0000),
    row(0x0699, 0x0699, 0x0699, 0x0000, 0x0000),
    row(0x069A, 0x069A, 0x069A, 0x069A, 0x069A),
    row(0x069B, 0x069B, 0x069B, 0x069B, 0x069B),
    row(0x069C, 0x069C, 0x069C, 0x069C, 0x069C),
    row(0x069D, 0x069D, 0x069D, 0x069D, 0x069D),
    row(0x069E, 0x069E, 0x069E, 0x069E, 0x069E),
    row(0x069F, 0x069F, 0x069F, 0x069F, 0x069F),
    row(0x06A0, 0x06A0, 0x06A0, 0x06A0, 0x06A0),
    row(0x06A1, 0x06A1, 0x06A1, 0x06A1, 0x06A1),
    row(0x06A2, 0x06A2, 0x06A2, 0x06A2, 0x06A2),
    row(0x06A3, 0x06A3, 0x06A3, 0x06A3, 0x06A3),
    row(0x06A4, 0xFB6A, 0xFB6B, 0xFB6D, 0xFB6C),
    row(0x06A5, 0x06A5, 0x06A5, 0x06A5, 0x06A5),
    row(0x06A6, 0xFB6E, 0xFB6F, 0xFB71, 0xFB70),
    row(0x06A7, 0x06A7, 0x06A7, 0x06A7, 0x06A7),
    row(0x06A8, 0x06A8, 0x06A8, 0x06A8, 0x06A8),
    row(0x06A9, 0xFB8E, 0xFB8F, 0xFB91, 0xFB90),
    row(0x06AA, 0x06AA, 0x06AA, 0x06AA, 0x06AA),
    row(0x06AB, 0x06AB, 0x06AB, 0x06AB, 0x06AB),
    row(0x06AC, 0x06AC, 0x06AC, 0x06AC, 0x06AC),
    row(0x06AD, 0xFBD3, 0xFBD4, 0xFBD6, 0xFBD5),
    row(0x06AE, 0x06AE, 0x06AE, 0x06AE, 0x06AE),
    row(0x06AF, 0xFB92, 0xFB93, 0xFB95, 0xFB94),
    row(0x06B0, 0x06B0, 0x06B0, 0x06B0, 0x06B0),
    row(0x06B1, 0xFB9A, 0xFB9B, 0xFB9D, 0xFB9C),
    row(0x06B2, 0x06B2, 0x06B2, 0x06B2, 0x06B2),
    row(0x06B3, 0xFB96, 0xFB97, 0xFB99, 0xFB98),
    row(0x06B4, 0x06B4, 0x06B4, 0x06B4, 0x06B4),
    row(0x06B5, 0x06B5, 0x06B5, 0x06B5, 0x06B5),
    row(0x06B6, 0x06B6, 0x06B6, 0x06B6, 0x06B6),
    row(0x06B7, 0x06B7, 0x06B7, 0x06B7, 0x06B7),
    row(0x06BA, 0xFB9E, 0xFB9F, 0x06BA, 0x06BA),
    row(0x06BB, 0xFBA0, 0xFBA1, 0xFBA3, 0xFBA2),
    row(0x06BC, 0x06BC, 0x06BC, 0x06BC, 0x06BC),
    row(0x06BD, 0x06BD, 0x06BD, 0x06BD, 0x06BD),
    row(0x06BE, 0xFBAA, 0xFBAB, 0xFBAD, 0xFBAC),
    row(0x06C0, 0xFBA4, 0xFBA5, 0x0000, 0x0000),
    row(0x06C1, 0xFBA6, 0xFBA7, 0xFBA9, 0xFBA8),
    row(0x06C2, 0x06C2, 0x06C2, 0x0000, 0x0000),
    row(0x06C3, 0x06C3, 0x06C3, 0x0000, 0x0000),
    row(0x06C4, 0x06C4, 0x06C4, 0x0000, 0x0000),
    row(0x06C5, 0xFBE0, 0xFBE1, 0x0000, 0x0000),
    row(0x06C6, 0xFBD9, 0xFBDA, 0x0000, 0x0000),
    row(0x06C7, 0xFBD7, 0xFBD8, 0x0000, 0x0000),
    row(0x06C8, 0xFBDB, 0xFBDC, 0x0000, 0x0000),
    row(0x06C9, 0xFBE2, 0xFBE3, 0x0000, 0x0000),
    row(0x06CA, 0x06CA, 0x06CA, 0x0000, 0x0000),
    row(0x06CB, 0xFBDE, 0xFBDF, 0x0000, 0x0000),
    row(0x06CC, 0xFBFC, 0xFBFD, 0xFBFF, 0xFBFE),
    row(0x06CD, 0x06CD, 0x06CD, 0x0000, 0x0000),
    row(0x06CE, 0x06CE, 0x06CE, 0x06CE, 0x06CE),
    row(0x06D0, 0xFBE4, 0xFBE5, 0xFBE7, 0xFBE6),
    // U+06C1..U+06CE and U+06D0 repeat below with different data. Lookups keep the
    // first occurrence, so the repeats are shadowed.
    row(0x06C1, 0x06C1, 0x06C1, 0x06C1, 0x06C1),
    row(0x06C2, 0x06C2, 0x06C2, 0x0000, 0x0000),
    row(0x06C3, 0x06C3, 0x06C3, 0x0000, 0x0000),
    row(0x06C4, 0x06C4, 0x06C4, 0x0000, 0x0000),
    row(0x06C5, 0x06C5, 0x06C5, 0x0000, 0x0000),
    row(0x06C6, 0x06C6, 0x06C6, 0x0000, 0x0000),
    row(0x06C7, 0x06C7, 0x06C7, 0x0000, 0x0000),
    row(0x06C8, 0x06C8, 0x06C8, 0x0000, 0x0000),
    row(0x06C9, 0x06C9, 0x06C9, 0x0000, 0x0000),
    row(0x06CA, 0x06CA, 0x06CA, 0x0000, 0x0000),
    row(0x06CB, 0x06CB, 0x06CB, 0x0000, 0x0000),
    row(0x06CC, 0x06CC, 0x06CC, 0x06CC, 0x06CC),
    row(0x06CD, 0x06CD, 0x06CD, 0x0000, 0x0000),
    row(0x06CE, 0x06CE, 0x06CE, 0x06CE, 0x06CE),
    row(0x06D0, 0x06D0, 0x06D0, 0x06D0, 0x06D0),
    row(0x06D1, 0x06D1, 0x06D1, 0x06D1, 0x06D1),
    row(0x06D2, 0xFBAE, 0xFBAF, 0x0000, 0x0000),
    row(0x06D3, 0xFBB0, 0xFBB1, 0x0000, 0x0000),
    row(0x06D5, 0x06D5, 0x0000, 0x0000, 0x0000),
    row(0x200D, 0x200D, 0x200D, 0x200D, 0x200D),
];

static NO_FORMS: ShapeEntry = ShapeEntry::NONE;

lazy_static! {
    static ref ARABIC_TABLE: ShapeTable = ShapeTable::from_rows(ARABIC_FORMS);
}

/// The built-in Arabic shape table.
pub fn arabic_table() -> &'static ShapeTable {
    &ARABIC_TABLE
}

/// Look up `ch` in the built-in Arabic shape table.
pub fn lookup(ch: u32) -> &'static ShapeEntry {
    ARABIC_TABLE.lookup(ch)
}

/// Keyed view over a list of `ShapeEntry` rows.
///
/// When a base codepoint occurs in more than one row the first row wins, the same
/// result a linear scan of the rows would give.
#[derive(Clone, Debug)]
pub struct ShapeTable {
    entries: FxHashMap<u32, ShapeEntry>,
    shadowed: Vec<usize>,
}

impl ShapeTable {
    /// Build a table from `rows`, checking that every row is usable.
    pub fn new(rows: &[ShapeEntry]) -> Result<ShapeTable, TableError> {
        for (index, row) in rows.iter().enumerate() {
            if row.base == 0 {
                return Err(TableError::ReservedBase { index });
            }
            let invalid = row
                .codepoints()
                .into_iter()
                .find(|&value| value != 0 && char::from_u32(value).is_none());
            if let Some(value) = invalid {
                return Err(TableError::InvalidCodepoint { index, value });
            }
        }

        Ok(ShapeTable::from_rows(rows))
    }

    fn from_rows(rows: &[ShapeEntry]) -> ShapeTable {
        let mut entries = FxHashMap::with_capacity_and_hasher(rows.len(), Default::default());
        let mut shadowed = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            match entries.entry(row.base) {
                Entry::Occupied(_) => {
                    debug!("shape table: row {} for U+{:04X} is shadowed", index, row.base);
                    shadowed.push(index);
                }
                Entry::Vacant(slot) => {
                    slot.insert(*row);
                }
            }
        }

        ShapeTable { entries, shadowed }
    }

    /// Returns the entry for `ch`, or `ShapeEntry::NONE` if `ch` has no forms.
    pub fn lookup(&self, ch: u32) -> &ShapeEntry {
        self.entries.get(&ch).unwrap_or(&NO_FORMS)
    }

    pub fn contains(&self, ch: u32) -> bool {
        self.entries.contains_key(&ch)
    }

    /// Number of distinct base codepoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of rows hidden by an earlier row with the same base.
    pub fn shadowed(&self) -> &[usize] {
        &self.shadowed
    }
}
