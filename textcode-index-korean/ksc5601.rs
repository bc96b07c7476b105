// This is a part of textcode.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! KS C 5601-1987 pointer data.
//!
//! Coverage: the fullwidth and kana regions plus a curated hangul subset.
// TODO: regenerate the full hangul and hanja regions from the Unicode
// consortium mapping files.

/// Contiguous regions: `(pointer, length, first code point)`.
pub static RUNS: &[(u16, u16, u32)] = &[
    (188, 59, 0xFF01),  // row 3: fullwidth ASCII up to the backslash slot
    (248, 34, 0xFF3D),  // row 3: fullwidth ASCII after the won sign
    (846, 83, 0x3041),  // row 10: hiragana
    (940, 86, 0x30A1),  // row 11: katakana
];

/// Isolated assignments: `(pointer, code point)`.
pub static SINGLES: &[(u16, u32)] = &[
    (0, 0x3000),        // row 1 cell 1, ideographic space
    (247, 0xFFE6),      // row 3 cell 60, fullwidth won sign
    // row 16: first hangul syllables
    (1410, 0xAC00), (1411, 0xAC01), (1412, 0xAC04), (1413, 0xAC07),
    (1414, 0xAC08),
    // assorted common syllables
    (1528, 0xAD6D), // row 17 cell 25
    (3620, 0xD55C), // row 39 cell 49
];
