// This is a part of textcode.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! JIS X 0208 pointer data.

/// Contiguous regions: `(pointer, length, first code point)`.
pub static RUNS: &[(u16, u16, u32)] = &[
    (203, 10, 0xFF10),  // row 3: fullwidth digits
    (220, 26, 0xFF21),  // row 3: fullwidth A-Z
    (252, 26, 0xFF41),  // row 3: fullwidth a-z
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
    (0, 0x3000), (1, 0x3001), (2, 0x3002), (3, 0xFF0C),
    (4, 0xFF0E), (5, 0x30FB), (6, 0xFF1A), (7, 0xFF1B),
    (8, 0xFF1F), (9, 0xFF01), (10, 0x309B), (11, 0x309C),
    (12, 0x00B4), (13, 0xFF40), (14, 0x00A8), (15, 0xFF3E),
    (16, 0xFFE3), (17, 0xFF3F), (18, 0x30FD), (19, 0x30FE),
    (20, 0x309D), (21, 0x309E), (22, 0x3003), (23, 0x4EDD),
    (24, 0x3005), (25, 0x3006), (26, 0x3007), (27, 0x30FC),
    (28, 0x2015), (29, 0x2010), (30, 0xFF0F), (31, 0xFF3C),
    (32, 0xFF5E), (33, 0x2225), (34, 0xFF5C), (35, 0x2026),
    (36, 0x2025), (37, 0x2018), (38, 0x2019), (39, 0x201C),
    (40, 0x201D), (41, 0xFF08), (42, 0xFF09), (43, 0x3014),
    (44, 0x3015), (45, 0xFF3B), (46, 0xFF3D), (47, 0xFF5B),
    (48, 0xFF5D), (49, 0x3008), (50, 0x3009), (51, 0x300A),
    (52, 0x300B), (53, 0x300C), (54, 0x300D), (55, 0x300E),
    (56, 0x300F), (57, 0x3010), (58, 0x3011), (59, 0xFF0B),
    (60, 0xFF0D), (61, 0x00B1), (62, 0x00D7), (63, 0x00F7),
    (64, 0xFF1D), (65, 0x2260), (66, 0xFF1C), (67, 0xFF1E),
    (68, 0x2266), (69, 0x2267), (70, 0x221E), (71, 0x2234),
    (72, 0x2642), (73, 0x2640), (74, 0x00B0), (75, 0x2032),
    (76, 0x2033), (77, 0x2103), (78, 0xFFE5), (79, 0xFF04),
    (80, 0xFFE0), (81, 0xFFE1), (82, 0xFF05), (83, 0xFF03),
    (84, 0xFF06), (85, 0xFF0A), (86, 0xFF20), (87, 0x00A7),
    (88, 0x2606), (89, 0x2605), (90, 0x25CB), (91, 0x25CF),
    (92, 0x25CE), (93, 0x25C7),
    // row 7: isolated Cyrillic IO
    (570, 0x0401), (618, 0x0451),
    // row 16: first kanji
    (1410, 0x4E9C), (1411, 0x5516), (1412, 0x5A03), (1413, 0x963F),
    (1414, 0x54C0), (1415, 0x611B),
    // assorted common kanji
    (3569, 0x65E5), // row 38 cell 92
    (4007, 0x672C), // row 43 cell 60
    (7073, 0x8C78), // row 76 cell 24
];
