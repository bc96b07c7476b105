// This is a part of textcode.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! JIS X 0213:2004 pointer data.
//!
//! Plane 1 is a superset of JIS X 0208; the parent crate layers these lists
//! over the `jis0208` lists when building the plane 1 table.

/// Plane 1 additions over JIS X 0208: `(pointer, code point)`.
pub static P1_SINGLES: &[(u16, u32)] = &[
    (365, 0x3094), // row 4 cell 84, hiragana vu
    (366, 0x3095), // row 4 cell 85, small ka
    (367, 0x3096), // row 4 cell 86, small ke
];

/// Plane 1 supplementary-plane assignments: `(pointer, code point)`.
pub static P1_WIDE: &[(u16, u32)] = &[
    (4375, 0x20B9F), // row 47 cell 52, CJK ideograph "to scold"
];

/// Plane 1 combining sequences: `(pointer, base, mark)`.
/// The kana rows carry the semi-voiced mark U+309A on kana that have no
/// precomposed form.
pub static P1_COMPOSITES: &[(u16, u16, u16)] = &[
    (368, 0x304B, 0x309A), // row 4 cell 87
    (369, 0x304D, 0x309A),
    (370, 0x304F, 0x309A),
    (371, 0x3051, 0x309A),
    (372, 0x3053, 0x309A),
    (462, 0x30AB, 0x309A), // row 5 cell 87
    (463, 0x30AD, 0x309A),
    (464, 0x30AF, 0x309A),
    (465, 0x30B1, 0x309A),
    (466, 0x30B3, 0x309A),
    (467, 0x30BB, 0x309A),
    (468, 0x30C4, 0x309A),
    (469, 0x30C8, 0x309A),
];

/// Plane 2 regions: `(pointer, length, first code point)`.
pub static P2_RUNS: &[(u16, u16, u32)] = &[];

/// Plane 2 BMP assignments: `(pointer, code point)`.
pub static P2_SINGLES: &[(u16, u32)] = &[];

/// Plane 2 supplementary-plane assignments: `(pointer, code point)`.
// TODO: populate plane 2 from the JIS X 0213:2004 mapping file; until then
// plane 2 byte pairs decode as unmappable.
pub static P2_WIDE: &[(u16, u32)] = &[];
