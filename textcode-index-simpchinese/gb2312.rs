// This is a part of textcode.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! GB 2312-80 pointer data.
//!
//! Coverage: the complete non-hanzi regions plus a curated hanzi subset.
// TODO: regenerate the full hanzi regions from the Unicode consortium
// mapping files.

/// Contiguous regions: `(pointer, length, first code point)`.
pub static RUNS: &[(u16, u16, u32)] = &[
    (188, 94, 0xFF01),  // row 3: fullwidth ASCII
    (282, 83, 0x3041),  // row 4: hiragana
    (376, 86, 0x30A1),  // row 5: katakana
    (470, 17, 0x0391),  // row 6: Greek capital, alpha..rho
    (487, 7, 0x03A3),   // row 6: Greek capital, sigma..omega
    (502, 17, 0x03B1),  // row 6: Greek small, alpha..rho
    (519, 7, 0x03C3),   // row 6: Greek small, sigma..omega
    (564, 6, 0x0410),   // row 7: Cyrillic capital, A..E
    (571, 26, 0x0416),  // row 7: Cyrillic capital, ZHE..YA
    (612, 6, 0x0430),   // row 7: Cyrillic small, a..e
    (619, 26, 0x0436),  // row 7: Cyrillic small, zhe..ya
];

/// Isolated assignments: `(pointer, code point)`.
pub static SINGLES: &[(u16, u32)] = &[
    // row 1: symbols and punctuation
    (0, 0x3000), (1, 0x3001), (2, 0x3002), (3, 0x00B7),
    (4, 0x02C9), (5, 0x02C7), (6, 0x00A8), (7, 0x3003),
    (8, 0x3005), (9, 0x2014), (10, 0xFF5E), (11, 0x2016),
    (12, 0x2026), (13, 0x2018), (14, 0x2019), (15, 0x201C),
    (16, 0x201D), (17, 0x3014), (18, 0x3015), (19, 0x3008),
    (20, 0x3009), (21, 0x300A), (22, 0x300B), (23, 0x300C),
    (24, 0x300D), (25, 0x300E), (26, 0x300F), (27, 0x3016),
    (28, 0x3017), (29, 0x3010), (30, 0x3011), (31, 0x00B1),
    (32, 0x00D7), (33, 0x00F7), (34, 0x2236), (35, 0x2227),
    (36, 0x2228), (37, 0x2211), (38, 0x220F), (39, 0x222A),
    (40, 0x2229), (41, 0x2208), (42, 0x2237), (43, 0x221A),
    (44, 0x22A5), (45, 0x2225), (46, 0x2220), (47, 0x2312),
    (48, 0x2299), (49, 0x222B), (50, 0x222E), (51, 0x2261),
    (52, 0x224C), (53, 0x2248), (54, 0x223D), (55, 0x221D),
    (56, 0x2260), (57, 0x226E), (58, 0x226F), (59, 0x2264),
    (60, 0x2265), (61, 0x221E), (62, 0x2235), (63, 0x2234),
    (64, 0x2642), (65, 0x2640), (66, 0x00B0), (67, 0x2032),
    (68, 0x2033), (69, 0x2103), (70, 0xFF04), (71, 0x00A4),
    (72, 0xFFE0), (73, 0xFFE1), (74, 0x2030), (75, 0x00A7),
    (76, 0x2116), (77, 0x2606), (78, 0x2605), (79, 0x25CB),
    (80, 0x25CF), (81, 0x25CE), (82, 0x25C7), (83, 0x25C6),
    (84, 0x25A1), (85, 0x25A0), (86, 0x25B3), (87, 0x25B2),
    (88, 0x203B), (89, 0x2192), (90, 0x2190), (91, 0x2191),
    (92, 0x2193), (93, 0x3013),
    // row 7: isolated Cyrillic IO
    (570, 0x0401), (618, 0x0451),
    // row 16: first hanzi, pinyin order
    (1410, 0x554A), (1411, 0x963F), (1412, 0x57C3), (1413, 0x6328),
    (1414, 0x54CE),
    // assorted common hanzi
    (2345, 0x56FD), // row 25 cell 90
    (3708, 0x4EBA), // row 40 cell 43
    (4265, 0x6587), // row 46 cell 36
    (5029, 0x4E2D), // row 54 cell 48
];
