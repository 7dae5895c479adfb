//! Consistency checks for shaping data.
//!
//! Mistakes in the shape table or the transparent list do not fail at runtime, they
//! just produce the wrong glyph. These checks compare the data against the Unicode
//! character database so suspect rows can be reviewed. Anomalies are reported, never
//! corrected.

use std::collections::hash_map::Entry;
use std::fmt;

use rustc_hash::FxHashMap;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_joining_type::{get_joining_type, JoiningType};

use crate::forms::{ShapeEntry, ARABIC_FORMS};
use crate::transparent::TRANSPARENT_MARKS;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableAnomaly {
    /// Row `index` repeats the base of row `first_index` and is never used.
    ShadowedRow {
        index: usize,
        base: u32,
        first_index: usize,
    },
    /// Row `index` gives an initial or medial form to a letter that cannot join to the
    /// letter after it.
    ForwardFormOnNonJoiner {
        index: usize,
        base: u32,
        joining_type: JoiningType,
    },
    /// A listed transparent mark is not joining-transparent in Unicode.
    NotTransparent { ch: u32, joining_type: JoiningType },
    /// A listed transparent mark is not a nonspacing mark.
    NotNonspacingMark { ch: u32, category: GeneralCategory },
}

impl fmt::Display for TableAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableAnomaly::ShadowedRow {
                index,
                base,
                first_index,
            } => write!(
                f,
                "row {} for U+{:04X} is shadowed by row {}",
                index, base, first_index
            ),
            TableAnomaly::ForwardFormOnNonJoiner {
                index,
                base,
                joining_type,
            } => write!(
                f,
                "row {} gives forward-joining forms to U+{:04X} with joining type {:?}",
                index, base, joining_type
            ),
            TableAnomaly::NotTransparent { ch, joining_type } => write!(
                f,
                "U+{:04X} is listed as transparent but has joining type {:?}",
                ch, joining_type
            ),
            TableAnomaly::NotNonspacingMark { ch, category } => write!(
                f,
                "U+{:04X} is listed as transparent but has general category {:?}",
                ch, category
            ),
        }
    }
}

fn joins_forward(joining_type: JoiningType) -> bool {
    matches!(
        joining_type,
        JoiningType::DualJoining | JoiningType::LeftJoining | JoiningType::JoinCausing
    )
}

/// Check shape table rows for repeated bases and forms the base letter cannot take.
pub fn audit_shape_rows(rows: &[ShapeEntry]) -> Vec<TableAnomaly> {
    let mut anomalies = Vec::new();
    let mut first_rows = FxHashMap::default();

    for (index, row) in rows.iter().enumerate() {
        match first_rows.entry(row.base) {
            Entry::Occupied(first) => anomalies.push(TableAnomaly::ShadowedRow {
                index,
                base: row.base,
                first_index: *first.get(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }

        if row.init == 0 && row.medi == 0 {
            continue;
        }
        if let Some(ch) = char::from_u32(row.base) {
            let joining_type = get_joining_type(ch);
            if !joins_forward(joining_type) {
                anomalies.push(TableAnomaly::ForwardFormOnNonJoiner {
                    index,
                    base: row.base,
                    joining_type,
                });
            }
        }
    }

    anomalies
}

/// Check that every listed mark is a transparent nonspacing mark.
pub fn audit_transparent_marks(marks: &[u32]) -> Vec<TableAnomaly> {
    let mut anomalies = Vec::new();

    for ch in marks.iter().filter_map(|&cp| char::from_u32(cp)) {
        let joining_type = get_joining_type(ch);
        if joining_type != JoiningType::Transparent {
            anomalies.push(TableAnomaly::NotTransparent {
                ch: u32::from(ch),
                joining_type,
            });
        }

        let category = get_general_category(ch);
        if category != GeneralCategory::NonspacingMark {
            anomalies.push(TableAnomaly::NotNonspacingMark {
                ch: u32::from(ch),
                category,
            });
        }
    }

    anomalies
}

/// Audit the built-in shape table and transparent marks.
pub fn audit() -> Vec<TableAnomaly> {
    let mut anomalies = audit_shape_rows(ARABIC_FORMS);
    anomalies.extend(audit_transparent_marks(TRANSPARENT_MARKS));
    anomalies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadowed_rows() {
        let rows = [
            ShapeEntry::new(0x0628, 0xFE8F, 0xFE90, 0xFE92, 0xFE91),
            ShapeEntry::new(0x0627, 0xFE8D, 0xFE8E, 0, 0),
            ShapeEntry::new(0x0628, 0x0628, 0x0628, 0x0628, 0x0628),
        ];
        assert_eq!(
            audit_shape_rows(&rows),
            vec![TableAnomaly::ShadowedRow {
                index: 2,
                base: 0x0628,
                first_index: 0
            }]
        );
    }

    #[test]
    fn test_forward_form_on_right_joiner() {
        // Alef only joins to the letter before it.
        let rows = [ShapeEntry::new(0x0627, 0xFE8D, 0xFE8E, 0, 0xFE8D)];
        assert_eq!(
            audit_shape_rows(&rows),
            vec![TableAnomaly::ForwardFormOnNonJoiner {
                index: 0,
                base: 0x0627,
                joining_type: JoiningType::RightJoining
            }]
        );
    }

    #[test]
    fn test_forward_form_on_non_arabic() {
        let rows = [ShapeEntry::new(0x0041, 0x0041, 0, 0x0061, 0)];
        let anomalies = audit_shape_rows(&rows);
        assert_eq!(anomalies.len(), 1);
        assert!(matches!(
            anomalies[0],
            TableAnomaly::ForwardFormOnNonJoiner { base: 0x0041, .. }
        ));
    }

    #[test]
    fn test_tatweel_and_zwj_join_forward() {
        let rows = [
            ShapeEntry::new(0x0640, 0x0640, 0x0640, 0x0640, 0x0640),
            ShapeEntry::new(0x200D, 0x200D, 0x200D, 0x200D, 0x200D),
        ];
        assert!(audit_shape_rows(&rows).is_empty());
    }

    #[test]
    fn test_transparent_anomalies() {
        // Shadda is a transparent mark. Beh and Space are neither.
        let anomalies = audit_transparent_marks(&[0x0651, 0x0628, 0x0020]);
        assert_eq!(
            anomalies,
            vec![
                TableAnomaly::NotTransparent {
                    ch: 0x0628,
                    joining_type: JoiningType::DualJoining
                },
                TableAnomaly::NotNonspacingMark {
                    ch: 0x0628,
                    category: GeneralCategory::OtherLetter
                },
                TableAnomaly::NotTransparent {
                    ch: 0x0020,
                    joining_type: JoiningType::NonJoining
                },
                TableAnomaly::NotNonspacingMark {
                    ch: 0x0020,
                    category: GeneralCategory::SpaceSeparator
                },
            ]
        );
    }

    #[test]
    fn test_display() {
        let anomaly = TableAnomaly::ShadowedRow {
            index: 143,
            base: 0x06D0,
            first_index: 128,
        };
        assert_eq!(
            anomaly.to_string(),
            "row 143 for U+06D0 is shadowed by row 128"
        );
    }
}
