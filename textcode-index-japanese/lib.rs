// This is a part of textcode.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! Japanese index tables for [textcode](https://github.com/textcode/textcode).
//!
//! Tables are expressed as static run/single/composite lists keyed by the
//! 94×94 pointer `(row - 1) * 94 + (cell - 1)`; the parent crate expands them
//! into lookup maps at first use.
//!
//! Coverage: the complete non-kanji regions (symbols, fullwidth forms, kana,
//! Greek, Cyrillic) plus a curated kanji subset.
// TODO: regenerate the full kanji regions from the Unicode consortium and
// JIS X 0213:2004 mapping files.

/// JIS X 0208 with the usual Windows-era symbol assignments
/// (wave dash as U+FF5E and friends), matching the WHATWG jis0208 index.
pub mod jis0208;

/// JIS X 0212-1990, the supplementary plane reachable from EUC-JP G3 and
/// the `ESC $ ( D` designation.
pub mod jis0212;

/// JIS X 0213:2004 additions over JIS X 0208: plane 1 extras, the plane 1
/// supplementary-plane assignments, and the combining-sequence entries.
pub mod jis0213;
