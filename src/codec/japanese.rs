// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

//! Legacy Japanese encodings based on JIS X 0208 and JIS X 0212.

use crate::tables::{self, Mapped, PairTable};
use crate::types::*;
use crate::util;

/**
 * EUC-JP. (XXX with asymmetric JIS X 0212 support)
 *
 * This is a Japanese encoding created from three JIS character sets:
 *
 * - JIS X 0201, which lower half is ISO/IEC 646:JP (US-ASCII with yen sign
 *   and overline) and upper half contains legacy half-width Katakanas.
 * - JIS X 0208, a primary graphic character set (94x94).
 * - JIS X 0212, a supplementary graphic character set (94x94).
 *
 * EUC-JP contains the lower half of JIS X 0201 in G0 (`[21-7E]`),
 * JIS X 0208 in G1 (`[A1-FE] [A1-FE]`),
 * the upper half of JIS X 0201 in G2 (`8E [A1-DF]`), and
 * JIS X 0212 in G3 (`8F [A1-FE] [A1-FE]`).
 */
pub struct EucJpCodec;

impl Codec for EucJpCodec {
    fn name(&self) -> &'static str {
        "euc-jp"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["eucjp", "euc_jp", "x-euc-jp"]
    }
    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(EucJpDecoder)
    }
    fn encoder(&self) -> Option<Box<dyn Encoder>> {
        Some(Box::new(EucJpEncoder))
    }
}

/// A decoder for EUC-JP with JIS X 0212 in G3.
///
/// Carries no cross-call state: incomplete multi-byte groups are left
/// unconsumed in the source per the cursor contract.
pub struct EucJpDecoder;

impl Decoder for EucJpDecoder {
    fn decode(&mut self, src: &mut Source<'_, u8>, dst: &mut Sink<'_, u16>) -> CoderResult {
        while let Some(lead) = src.peek(0) {
            match lead {
                0x00..=0x7F => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(lead as u16);
                    src.advance(1);
                }
                0x8E => {
                    // JIS X 0201 half-width katakana
                    let trail = match src.peek(1) {
                        Some(b) => b,
                        None => return CoderResult::Underflow,
                    };
                    if !(0xA1..=0xDF).contains(&trail) {
                        return CoderResult::Malformed(1);
                    }
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(0xFF61 + (trail - 0xA1) as u16);
                    src.advance(2);
                }
                0x8F => {
                    // JIS X 0212 three-byte sequence
                    let t1 = match src.peek(1) {
                        Some(b) => b,
                        None => return CoderResult::Underflow,
                    };
                    if !(0xA1..=0xFE).contains(&t1) {
                        return CoderResult::Malformed(1);
                    }
                    let t2 = match src.peek(2) {
                        Some(b) => b,
                        None => return CoderResult::Underflow,
                    };
                    if !(0xA1..=0xFE).contains(&t2) {
                        return CoderResult::Malformed(2);
                    }
                    let ptr = (t1 - 0xA1) as u16 * 94 + (t2 - 0xA1) as u16;
                    match tables::jis0212().forward(ptr) {
                        Mapped::One(unit) => {
                            if dst.remaining() < 1 {
                                return CoderResult::Overflow;
                            }
                            dst.push(unit);
                            src.advance(3);
                        }
                        _ => return CoderResult::Unmappable(3),
                    }
                }
                0xA1..=0xFE => {
                    let trail = match src.peek(1) {
                        Some(b) => b,
                        None => return CoderResult::Underflow,
                    };
                    if !(0xA1..=0xFE).contains(&trail) {
                        return CoderResult::Malformed(1);
                    }
                    let ptr = (lead - 0xA1) as u16 * 94 + (trail - 0xA1) as u16;
                    match tables::jis0208().forward(ptr) {
                        Mapped::One(unit) => {
                            if dst.remaining() < 1 {
                                return CoderResult::Overflow;
                            }
                            dst.push(unit);
                            src.advance(2);
                        }
                        _ => return CoderResult::Unmappable(2),
                    }
                }
                _ => return CoderResult::Malformed(1),
            }
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, _dst: &mut Sink<'_, u16>) -> CoderResult {
        CoderResult::Underflow
    }

    fn reset(&mut self) {}
}

/// An encoder for EUC-JP with unused G3 character set.
pub struct EucJpEncoder;

impl Encoder for EucJpEncoder {
    fn encode(&mut self, src: &mut Source<'_, u16>, dst: &mut Sink<'_, u8>) -> CoderResult {
        while let Some(unit) = src.peek(0) {
            match unit {
                0x0000..=0x007F => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(unit as u8);
                    src.advance(1);
                }
                0x00A5 => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(0x5C);
                    src.advance(1);
                }
                0x203E => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(0x7E);
                    src.advance(1);
                }
                0xFF61..=0xFF9F => {
                    if dst.remaining() < 2 {
                        return CoderResult::Overflow;
                    }
                    dst.push(0x8E);
                    dst.push((unit - 0xFF61 + 0xA1) as u8);
                    src.advance(1);
                }
                _ => {
                    if let Some(res) = check_surrogates(src, unit) {
                        return res;
                    }
                    match tables::jis0208().backward(unit) {
                        Some(ptr) => {
                            if dst.remaining() < 2 {
                                return CoderResult::Overflow;
                            }
                            dst.push((ptr / 94 + 0xA1) as u8);
                            dst.push((ptr % 94 + 0xA1) as u8);
                            src.advance(1);
                        }
                        // JIS X 0212 is not supported in the encoder
                        None => return CoderResult::Unmappable(1),
                    }
                }
            }
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, _dst: &mut Sink<'_, u8>) -> CoderResult {
        CoderResult::Underflow
    }

    fn reset(&mut self) {}
}

/// Classifies a surrogate unit for BMP-only encoders: a well-formed pair
/// is unmappable, a lone high surrogate at the end of input may yet be
/// completed, and anything else is malformed.
pub(crate) fn check_surrogates(src: &Source<'_, u16>, unit: u16) -> Option<CoderResult> {
    if util::is_high_surrogate(unit) {
        return Some(match src.peek(1) {
            None => CoderResult::Underflow,
            Some(next) if util::is_low_surrogate(next) => CoderResult::Unmappable(2),
            Some(_) => CoderResult::Malformed(1),
        });
    }
    if util::is_low_surrogate(unit) {
        return Some(CoderResult::Malformed(1));
    }
    None
}

/**
 * Shift_JIS for JIS X 0208.
 *
 * The 94 by 94 region of JIS X 0208 is sliced, or rather "shifted" into
 * the odd half (odd row number) and even half (even row number), and
 * merged into the 188 by 47 region mapped to `[81-9F E0-EF] [40-7E 80-FC]`.
 * The original JIS X 0201 single-byte assignments remain at `[21-7E]` and
 * `[A1-DF]`, and the end-user defined area `[F0-F9] [40-7E 80-FC]` is
 * passed through to the Private Use Area. It requires some cares to handle
 * since the second byte of JIS X 0208 can have its MSB unset.
 */
pub struct ShiftJisCodec;

impl Codec for ShiftJisCodec {
    fn name(&self) -> &'static str {
        "shift_jis"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["sjis", "shift-jis", "x-sjis"]
    }
    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(ShiftJisDecoder)
    }
    fn encoder(&self) -> Option<Box<dyn Encoder>> {
        Some(Box::new(ShiftJisEncoder))
    }
}

/// Converts a Shift_JIS lead/trail pair to a 94×94 pointer. The caller
/// has already checked both ranges.
fn sjis_pointer(lead: u8, trail: u8) -> u16 {
    let lead_offset = if lead < 0xA0 { 0x81 } else { 0xC1 };
    let trail_offset = if trail < 0x7F { 0x40 } else { 0x41 };
    (lead - lead_offset) as u16 * 188 + (trail - trail_offset) as u16
}

/// Converts a 94×94 pointer back to a Shift_JIS lead/trail pair.
fn sjis_bytes(ptr: u16) -> (u8, u8) {
    let lead = ptr / 188;
    let lead_offset = if lead < 0x1F { 0x81 } else { 0xC1 };
    let trail = ptr % 188;
    let trail_offset = if trail < 0x3F { 0x40 } else { 0x41 };
    ((lead + lead_offset) as u8, (trail + trail_offset) as u8)
}

fn is_sjis_trail(trail: u8) -> bool {
    matches!(trail, 0x40..=0x7E | 0x80..=0xFC)
}

/// A decoder for Shift_JIS (JIS X 0208).
pub struct ShiftJisDecoder;

impl Decoder for ShiftJisDecoder {
    fn decode(&mut self, src: &mut Source<'_, u8>, dst: &mut Sink<'_, u16>) -> CoderResult {
        while let Some(lead) = src.peek(0) {
            match lead {
                0x00..=0x7F => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(lead as u16);
                    src.advance(1);
                }
                0xA1..=0xDF => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(0xFF61 + (lead - 0xA1) as u16);
                    src.advance(1);
                }
                0x81..=0x9F | 0xE0..=0xEF => {
                    let trail = match src.peek(1) {
                        Some(b) => b,
                        None => return CoderResult::Underflow,
                    };
                    if !is_sjis_trail(trail) {
                        return CoderResult::Malformed(1);
                    }
                    match tables::jis0208().forward(sjis_pointer(lead, trail)) {
                        Mapped::One(unit) => {
                            if dst.remaining() < 1 {
                                return CoderResult::Overflow;
                            }
                            dst.push(unit);
                            src.advance(2);
                        }
                        _ => return CoderResult::Unmappable(2),
                    }
                }
                0xF0..=0xF9 => {
                    // end-user defined area, mapped verbatim to the PUA
                    let trail = match src.peek(1) {
                        Some(b) => b,
                        None => return CoderResult::Underflow,
                    };
                    if !is_sjis_trail(trail) {
                        return CoderResult::Malformed(1);
                    }
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    let trail_offset = if trail < 0x7F { 0x40 } else { 0x41 };
                    dst.push(0xE000 + (lead - 0xF0) as u16 * 188 + (trail - trail_offset) as u16);
                    src.advance(2);
                }
                _ => return CoderResult::Malformed(1),
            }
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, _dst: &mut Sink<'_, u16>) -> CoderResult {
        CoderResult::Underflow
    }

    fn reset(&mut self) {}
}

/// An encoder for Shift_JIS (JIS X 0208).
pub struct ShiftJisEncoder;

impl Encoder for ShiftJisEncoder {
    fn encode(&mut self, src: &mut Source<'_, u16>, dst: &mut Sink<'_, u8>) -> CoderResult {
        while let Some(unit) = src.peek(0) {
            match unit {
                0x0000..=0x0080 => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(unit as u8);
                    src.advance(1);
                }
                0x00A5 => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(0x5C);
                    src.advance(1);
                }
                0x203E => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(0x7E);
                    src.advance(1);
                }
                0xFF61..=0xFF9F => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push((unit - 0xFF61 + 0xA1) as u8);
                    src.advance(1);
                }
                0xE000..=0xE757 => {
                    if dst.remaining() < 2 {
                        return CoderResult::Overflow;
                    }
                    let ptr = unit - 0xE000;
                    let trail = ptr % 188;
                    let trail_offset = if trail < 0x3F { 0x40 } else { 0x41 };
                    dst.push((0xF0 + ptr / 188) as u8);
                    dst.push((trail + trail_offset) as u8);
                    src.advance(1);
                }
                _ => {
                    if let Some(res) = check_surrogates(src, unit) {
                        return res;
                    }
                    match tables::jis0208().backward(unit) {
                        Some(ptr) => {
                            if dst.remaining() < 2 {
                                return CoderResult::Overflow;
                            }
                            let (lead, trail) = sjis_bytes(ptr);
                            dst.push(lead);
                            dst.push(trail);
                            src.advance(1);
                        }
                        None => return CoderResult::Unmappable(1),
                    }
                }
            }
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, _dst: &mut Sink<'_, u8>) -> CoderResult {
        CoderResult::Underflow
    }

    fn reset(&mut self) {}
}

/// Decodes a byte stream split at every offset and through a 1-unit
/// destination window, checking both against the one-shot result. Shared
/// by the codec test modules.
#[cfg(test)]
pub(crate) fn check_incremental(codec: &dyn Codec, bytes: &[u8]) {
    let expected = codec.decode(bytes, DecoderTrap::Strict).unwrap();

    // resumability: split at every byte offset, carrying unconsumed bytes
    for split in 0..=bytes.len() {
        let mut decoder = codec.decoder();
        let mut units = Vec::new();
        let mut carry: Vec<u8> = Vec::new();
        for chunk in [&bytes[..split], &bytes[split..]] {
            carry.extend_from_slice(chunk);
            let mut src = Source::new(&carry);
            let mut buf = [0u16; 256];
            let mut dst = Sink::new(&mut buf);
            let res = decoder.decode(&mut src, &mut dst);
            assert_eq!(res, CoderResult::Underflow, "split at {}", split);
            units.extend_from_slice(dst.written());
            carry = src.rest().to_vec();
        }
        let mut buf = [0u16; 64];
        let mut dst = Sink::new(&mut buf);
        assert_eq!(decoder.flush(&mut dst), CoderResult::Underflow);
        units.extend_from_slice(dst.written());
        assert!(carry.is_empty(), "split at {} left {:02x?}", split, carry);
        assert_eq!(String::from_utf16(&units).unwrap(), expected, "split at {}", split);
    }

    // overflow non-loss: a 1-unit destination window loses nothing
    let mut decoder = codec.decoder();
    let mut src = Source::new(bytes);
    let mut units = Vec::new();
    loop {
        let mut one = [0u16; 1];
        let mut dst = Sink::new(&mut one);
        let res = decoder.decode(&mut src, &mut dst);
        units.extend_from_slice(dst.written());
        match res {
            CoderResult::Overflow => continue,
            CoderResult::Underflow => break,
            other => panic!("unexpected result {:?}", other),
        }
    }
    loop {
        let mut one = [0u16; 1];
        let mut dst = Sink::new(&mut one);
        let res = decoder.flush(&mut dst);
        units.extend_from_slice(dst.written());
        match res {
            CoderResult::Overflow => continue,
            CoderResult::Underflow => break,
            other => panic!("unexpected result {:?}", other),
        }
    }
    assert_eq!(String::from_utf16(&units).unwrap(), expected);
}

/// Round-trips every code point the table can represent through the
/// codec. Shared by the codec test modules.
#[cfg(test)]
pub(crate) fn check_table_round_trip(codec: &dyn Codec, table: &PairTable) {
    for (_ptr, mapped) in table.entries() {
        let text = match mapped {
            Mapped::One(unit) => String::from_utf16(&[unit]).unwrap(),
            Mapped::Pair(hi, lo) => String::from_utf16(&[hi, lo]).unwrap(),
            // composites are exercised separately; the mark alone can also
            // belong to a different pointer
            Mapped::Composite(..) => continue,
            Mapped::Unmapped => unreachable!(),
        };
        let encoded = match codec.encode(&text, EncoderTrap::Strict) {
            Ok(bytes) => bytes,
            // asymmetric repertoires (e.g. decode-only planes) are fine
            Err(ConvertError::Unmappable { .. }) => continue,
            Err(err) => panic!("encode {:?}: {}", text, err),
        };
        let decoded = codec.decode(&encoded, DecoderTrap::Strict).unwrap();
        assert_eq!(decoded, text, "bytes {:02x?}", encoded);
    }
}


#[cfg(test)]
mod shiftjis_tests {
    use super::*;

    #[test]
    fn test_encoder_valid() {
        let mut e = ShiftJisCodec.encoder().unwrap();
        assert_feed_ok!(e, "A", "", [0x41]);
        assert_feed_ok!(e, "BC", "", [0x42, 0x43]);
        assert_feed_ok!(e, "", "", []);
        assert_feed_ok!(e, "\u{a5}", "", [0x5C]);
        assert_feed_ok!(e, "\u{203e}", "", [0x7E]);
        assert_feed_ok!(e, "\u{306b}\u{307b}\u{3093}", "", [0x82, 0xC9, 0x82, 0xD9, 0x82, 0xF1]);
        assert_feed_ok!(e, "\u{ff86}\u{ff8e}\u{ff9d}", "", [0xC6, 0xCE, 0xDD]);
        assert_feed_ok!(e, "\u{65e5}\u{672c}", "", [0x93, 0xFA, 0x96, 0x7B]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_invalid() {
        let mut e = ShiftJisCodec.encoder().unwrap();
        assert_feed_err!(e, CoderResult::Unmappable(1), "\u{ffff}", "\u{ffff}", []);
        assert_feed_err!(e, CoderResult::Unmappable(1), "?\u{ffff}!", "\u{ffff}!", [0x3F]);
        assert_feed_err!(e, CoderResult::Unmappable(1), "\u{736c}\u{8c78}", "\u{736c}\u{8c78}", []);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_decoder_valid() {
        let mut d = ShiftJisCodec.decoder();
        assert_feed_ok!(d, [0x41], [], "A");
        assert_feed_ok!(d, [0x42, 0x43], [], "BC");
        assert_feed_ok!(d, [], [], "");
        assert_feed_ok!(d, [0x5C], [], "\\");
        assert_feed_ok!(d, [0x7E], [], "~");
        assert_feed_ok!(d, [0x82, 0xC9, 0x82, 0xD9, 0x82, 0xF1], [], "\u{306b}\u{307b}\u{3093}");
        assert_feed_ok!(d, [0xC6, 0xCE, 0xDD], [], "\u{ff86}\u{ff8e}\u{ff9d}");
        assert_feed_ok!(d, [0x93, 0xFA, 0x96, 0x7B], [], "\u{65e5}\u{672c}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_eudc_round_trip() {
        let mut d = ShiftJisCodec.decoder();
        assert_feed_ok!(d, [0xF0, 0x40, 0xF9, 0xFC], [], "\u{e000}\u{e757}");
        assert_finish_ok!(d, "");

        let mut e = ShiftJisCodec.encoder().unwrap();
        assert_feed_ok!(e, "\u{e000}\u{e757}", "", [0xF0, 0x40, 0xF9, 0xFC]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_decoder_incomplete_group_left_unconsumed() {
        let mut d = ShiftJisCodec.decoder();
        assert_feed_ok!(d, [0x82, 0xA0, 0x82], [0x82], "\u{3042}");
        assert_feed_ok!(d, [0x82, 0xA0], [], "\u{3042}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_invalid() {
        let mut d = ShiftJisCodec.decoder();
        assert_feed_err!(d, CoderResult::Malformed(1), [0x41, 0x80, 0x42], [0x80, 0x42], "A");
        assert_feed_err!(d, CoderResult::Malformed(1), [0x82, 0x3F], [0x82, 0x3F], "");
        assert_feed_err!(d, CoderResult::Unmappable(2), [0x88, 0x40], [0x88, 0x40], "");
    }

    #[test]
    fn test_incremental() {
        check_incremental(&ShiftJisCodec, &[0x41, 0x82, 0xC9, 0xC6, 0x93, 0xFA, 0x42]);
    }

    #[test]
    fn test_table_round_trip() {
        check_table_round_trip(&ShiftJisCodec, tables::jis0208());
    }
}
