//! Error types

use std::fmt;

/// Errors that originate when building a shape table from caller supplied rows
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TableError {
    /// A row uses base codepoint 0, which is reserved to mean "no letter".
    ReservedBase { index: usize },
    /// A row contains a value that is not a Unicode scalar value.
    InvalidCodepoint { index: usize, value: u32 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ReservedBase { index } => {
                write!(f, "row {} uses reserved base codepoint 0", index)
            }
            TableError::InvalidCodepoint { index, value } => {
                write!(f, "row {} contains invalid codepoint 0x{:X}", index, value)
            }
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            TableError::ReservedBase { index: 3 }.to_string(),
            "row 3 uses reserved base codepoint 0"
        );
        assert_eq!(
            TableError::InvalidCodepoint {
                index: 0,
                value: 0xD800
            }
            .to_string(),
            "row 0 contains invalid codepoint 0xD800"
        );
    }
}
