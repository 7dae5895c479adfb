//! Joining-transparent marks.
//!
//! Transparent marks neither take a positional form nor break the join between the
//! letters on either side of them.

/// Sorted list of the marks treated as transparent.
pub static TRANSPARENT_MARKS: &[u32] = &[
    0x064B, // Fathatan
    0x064C, // Dammatan
    0x064D, // Kasratan
    0x064E, // Fatha
    0x064F, // Damma
    0x0650, // Kasra
    0x0670, // Superscript Alef
    0x06D7, // Small High Ligature Qaf With Lam With Alef Maksura
    0x06D8, // Small High Meem Initial Form
    0x06D9, // Small High Lam Alef
    0x06DA, // Small High Jeem
    0x06DB, // Small High Three Dots
    0x06DC, // Small High Seen
    0x06DF, // Small High Rounded Zero
    0x06E0, // Small High Upright Rectangular Zero
    0x06E1, // Small High Dotless Head Of Khah
    0x06E2, // Small High Meem Isolated Form
    0x06E3, // Small Low Seen
    0x06E4, // Small High Madda
    0x06E7, // Small High Yeh
    0x06E8, // Small High Noon
    0x06EA, // Empty Centre Low Stop
    0x06EB, // Empty Centre High Stop
    0x06EC, // Rounded High Stop With Filled Centre
    0x06ED, // Small Low Meem
];

pub fn is_transparent(ch: u32) -> bool {
    TRANSPARENT_MARKS.binary_search(&ch).is_ok()
}
