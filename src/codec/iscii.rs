// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

/*!
 * ISCII-91 (IS 13194:1991), the Indian Script Code for Information
 * Interchange, in its Devanagari page.
 *
 * The lower half is plain ASCII; the upper half is a fixed byte-to-code
 * map with a one-token lookback on top. A handful of decoded characters
 * are "composable": they are held back for one byte because a following
 * Nukta rewrites them into a different single code point (candrabindu
 * plus Nukta is OM, danda plus Nukta is avagraha, and so on), and a
 * Halant pair collapses into Halant plus ZWNJ. The encoder undoes the
 * zero-width conventions (ZWNJ back to the Halant byte, ZWJ back to the
 * Nukta byte) and otherwise uses a flat map of one or two bytes per
 * code point.
 */

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::types::*;

use super::japanese::check_surrogates;

/// Attribute byte: the following byte is a rendering attribute, shown
/// as U+FFFD here.
const ATR: u8 = 0xEF;
/// Extension byte: same treatment as `ATR`.
const EXT: u8 = 0xF0;

const HALANT_BYTE: u8 = 0xE8;
const NUKTA_BYTE: u8 = 0xE9;
const DANDA_BYTE: u8 = 0xEA;

const HALANT: u16 = 0x094D;
const ZWNJ: u16 = 0x200C;
const ZWJ: u16 = 0x200D;

/// The fixed byte map for `[A1-FA]`; zero marks unassigned bytes.
/// `D9` is the INV placeholder, mapped to ZWJ.
static DIRECT: [u16; 90] = [
    0x0901, 0x0902, 0x0903, 0x0905, 0x0906, 0x0907, 0x0908, 0x0909, 0x090A, 0x090B, // a1-aa
    0x090E, 0x090F, 0x0910, 0x090D, 0x0912, 0x0913, 0x0914, 0x0911, 0x0915, 0x0916, // ab-b4
    0x0917, 0x0918, 0x0919, 0x091A, 0x091B, 0x091C, 0x091D, 0x091E, 0x091F, 0x0920, // b5-be
    0x0921, 0x0922, 0x0923, 0x0924, 0x0925, 0x0926, 0x0927, 0x0928, 0x0929, 0x092A, // bf-c8
    0x092B, 0x092C, 0x092D, 0x092E, 0x092F, 0x095F, 0x0930, 0x0931, 0x0932, 0x0933, // c9-d2
    0x0934, 0x0935, 0x0936, 0x0937, 0x0938, 0x0939, 0x200D, 0x093E, 0x093F, 0x0940, // d3-dc
    0x0941, 0x0942, 0x0943, 0x0946, 0x0947, 0x0948, 0x0945, 0x094A, 0x094B, 0x094C, // dd-e6
    0x0949, 0x094D, 0x093C, 0x0964, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // e7-f0
    0x0966, 0x0967, 0x0968, 0x0969, 0x096A, 0x096B, 0x096C, 0x096D, 0x096E, 0x096F, // f1-fa
];

fn direct(b: u8) -> u16 {
    if (0xA1..=0xFA).contains(&b) {
        DIRECT[(b - 0xA1) as usize]
    } else {
        0
    }
}

/// The rewritten code point for a pending character followed by Nukta.
fn combine_nukta(pending: u16) -> Option<u16> {
    match pending {
        0x0901 => Some(0x0950), // candrabindu -> OM
        0x0907 => Some(0x090C), // I -> vocalic L
        0x0908 => Some(0x0961), // II -> vocalic LL
        0x090B => Some(0x0960), // RI -> vocalic RR
        0x093F => Some(0x0962), // I sign -> vocalic L sign
        0x0940 => Some(0x0963), // II sign -> vocalic LL sign
        0x0943 => Some(0x0944), // RI sign -> vocalic RR sign
        0x0964 => Some(0x093D), // danda -> avagraha
        _ => None,
    }
}

/// True for decoded characters held back one byte for a possible
/// combination: the `combine_nukta` keys plus Halant.
fn is_composable(unit: u16) -> bool {
    unit == HALANT || combine_nukta(unit).is_some()
}

/// The flat encode map: each code point to one or two bytes. The
/// zero-width conventions and the Nukta combinations come first so they
/// win over the plain byte map (INV also decodes to ZWJ but never
/// re-encodes as itself).
static BACKWARD: Lazy<FxHashMap<u16, (u8, Option<u8>)>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert(ZWNJ, (HALANT_BYTE, None));
    map.insert(ZWJ, (NUKTA_BYTE, None));
    map.insert(0x0950, (0xA1, Some(NUKTA_BYTE)));
    map.insert(0x090C, (0xA6, Some(NUKTA_BYTE)));
    map.insert(0x0961, (0xA7, Some(NUKTA_BYTE)));
    map.insert(0x0960, (0xAA, Some(NUKTA_BYTE)));
    map.insert(0x0962, (0xDB, Some(NUKTA_BYTE)));
    map.insert(0x0963, (0xDC, Some(NUKTA_BYTE)));
    map.insert(0x0944, (0xDF, Some(NUKTA_BYTE)));
    map.insert(0x093D, (DANDA_BYTE, Some(NUKTA_BYTE)));
    for (i, &unit) in DIRECT.iter().enumerate() {
        if unit != 0 {
            map.entry(unit).or_insert((0xA1 + i as u8, None));
        }
    }
    map
});

pub struct IsciiCodec;

impl Codec for IsciiCodec {
    fn name(&self) -> &'static str {
        "x-iscii91"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["iscii91", "iscii-91", "iscii"]
    }
    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(IsciiDecoder { pending: None, replace_next: false })
    }
    fn encoder(&self) -> Option<Box<dyn Encoder>> {
        Some(Box::new(IsciiEncoder))
    }
}

/// A decoder for ISCII-91 with the one-token lookback.
pub struct IsciiDecoder {
    /// A composable character awaiting the next byte.
    pending: Option<u16>,
    /// Set after `ATR`/`EXT`: the next byte decodes to U+FFFD whatever
    /// its own mapping.
    replace_next: bool,
}

impl IsciiDecoder {
    /// Writes the pending character if any; false when out of space.
    fn emit_pending(&mut self, dst: &mut Sink<'_, u16>) -> bool {
        if let Some(p) = self.pending {
            if dst.remaining() < 1 {
                return false;
            }
            dst.push(p);
            self.pending = None;
        }
        true
    }
}

impl Decoder for IsciiDecoder {
    fn decode(&mut self, src: &mut Source<'_, u8>, dst: &mut Sink<'_, u16>) -> CoderResult {
        while let Some(b) = src.peek(0) {
            if self.replace_next {
                if dst.remaining() < 1 {
                    return CoderResult::Overflow;
                }
                dst.push(0xFFFD);
                self.replace_next = false;
                src.advance(1);
                continue;
            }
            if b == ATR || b == EXT {
                if !self.emit_pending(dst) {
                    return CoderResult::Overflow;
                }
                self.replace_next = true;
                src.advance(1);
                continue;
            }
            let unit = if b < 0x80 { b as u16 } else { direct(b) };
            if unit == 0 {
                // the carried character precedes the error
                if !self.emit_pending(dst) {
                    return CoderResult::Overflow;
                }
                return CoderResult::Malformed(1);
            }
            if let Some(p) = self.pending {
                if b == NUKTA_BYTE {
                    if let Some(combined) = combine_nukta(p) {
                        if dst.remaining() < 1 {
                            return CoderResult::Overflow;
                        }
                        dst.push(combined);
                        self.pending = None;
                        src.advance(1);
                        continue;
                    }
                    if p == HALANT {
                        // soft halant: keeps the consonant half-formed
                        if dst.remaining() < 2 {
                            return CoderResult::Overflow;
                        }
                        dst.push(HALANT);
                        dst.push(ZWJ);
                        self.pending = None;
                        src.advance(1);
                        continue;
                    }
                } else if b == HALANT_BYTE && p == HALANT {
                    // double halant suppresses the ligature
                    if dst.remaining() < 2 {
                        return CoderResult::Overflow;
                    }
                    dst.push(HALANT);
                    dst.push(ZWNJ);
                    self.pending = None;
                    src.advance(1);
                    continue;
                }
                // no combination: carry the pending character out, then
                // re-evaluate the current byte from scratch
                if dst.remaining() < 1 {
                    return CoderResult::Overflow;
                }
                dst.push(p);
                self.pending = None;
            }
            if is_composable(unit) {
                self.pending = Some(unit);
            } else {
                if dst.remaining() < 1 {
                    return CoderResult::Overflow;
                }
                dst.push(unit);
            }
            src.advance(1);
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, dst: &mut Sink<'_, u16>) -> CoderResult {
        if !self.emit_pending(dst) {
            return CoderResult::Overflow;
        }
        self.replace_next = false;
        CoderResult::Underflow
    }

    fn reset(&mut self) {
        self.pending = None;
        self.replace_next = false;
    }
}

/// An encoder for ISCII-91. Stateless: the decode-side lookback has no
/// encode-side mirror beyond the flat two-byte entries.
pub struct IsciiEncoder;

impl Encoder for IsciiEncoder {
    fn encode(&mut self, src: &mut Source<'_, u16>, dst: &mut Sink<'_, u8>) -> CoderResult {
        while let Some(unit) = src.peek(0) {
            if unit < 0x0080 {
                if dst.remaining() < 1 {
                    return CoderResult::Overflow;
                }
                dst.push(unit as u8);
                src.advance(1);
                continue;
            }
            if let Some(res) = check_surrogates(src, unit) {
                return res;
            }
            match BACKWARD.get(&unit) {
                Some(&(b1, b2)) => {
                    let len = if b2.is_some() { 2 } else { 1 };
                    if dst.remaining() < len {
                        return CoderResult::Overflow;
                    }
                    dst.push(b1);
                    if let Some(b2) = b2 {
                        dst.push(b2);
                    }
                    src.advance(1);
                }
                None => return CoderResult::Unmappable(1),
            }
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, _dst: &mut Sink<'_, u8>) -> CoderResult {
        CoderResult::Underflow
    }

    fn reset(&mut self) {}
}
