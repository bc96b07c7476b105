// This is a part of textcode.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! CNS 11643-1992 pointer data.
//!
//! Coverage: a curated subset of planes 1 and 2.
// TODO: regenerate planes 1-3 from the Unicode consortium mapping files;
// until then plane 3 byte pairs decode as unmappable.

/// Plane 1 regions: `(pointer, length, first code point)`.
pub static P1_RUNS: &[(u16, u16, u32)] = &[];

/// Plane 1 isolated assignments: `(pointer, code point)`.
pub static P1_SINGLES: &[(u16, u32)] = &[
    (0, 0x3000),    // row 1 cell 1, ideographic space
    // row 36: first hanzi, stroke order
    (3290, 0x4E00), (3291, 0x4E59), (3292, 0x4E01), (3293, 0x4E03),
    (3294, 0x4E43), (3295, 0x4E5D),
];

/// Plane 2 regions: `(pointer, length, first code point)`.
pub static P2_RUNS: &[(u16, u16, u32)] = &[];

/// Plane 2 isolated assignments: `(pointer, code point)`.
pub static P2_SINGLES: &[(u16, u32)] = &[
    (0, 0x4E42),    // row 1 cell 1
    (1, 0x4E5C),    // row 1 cell 2
];

/// Plane 3 regions: `(pointer, length, first code point)`.
pub static P3_RUNS: &[(u16, u16, u32)] = &[];

/// Plane 3 isolated assignments: `(pointer, code point)`.
pub static P3_SINGLES: &[(u16, u32)] = &[];
