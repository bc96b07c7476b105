// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

/*!
 * Shift_JIS-2004, the shift encoding of JIS X 0213:2004.
 *
 * Plane 1 extends the familiar Shift_JIS layout of JIS X 0208 at
 * `[81-9F E0-EF] [40-7E 80-FC]`; plane 2 occupies the former extension
 * leads `[F0-FC]` with a non-contiguous row assignment. On top of the
 * plain double-byte lookup the 2004 tables add supplementary-plane
 * assignments (decoded to surrogate pairs) and base-plus-combining-mark
 * composites, which force the encoder to keep one character of
 * lookahead: a composite base cannot be emitted until the following
 * character is known.
 */

use crate::tables::{self, Mapped};
use crate::types::*;
use crate::util;

/// Rows of JIS X 0213 plane 2 carried by each lead byte `F0..FC`, as
/// `(first half, second half)` with the half chosen by trail < 0x9F.
static PLANE2_ROWS: [(u16, u16); 13] = [
    (1, 8),
    (3, 4),
    (5, 12),
    (13, 14),
    (15, 78),
    (79, 80),
    (81, 82),
    (83, 84),
    (85, 86),
    (87, 88),
    (89, 90),
    (91, 92),
    (93, 94),
];

fn is_trail(trail: u8) -> bool {
    matches!(trail, 0x40..=0x7E | 0x80..=0xFC)
}

fn is_lead(b: u8) -> bool {
    matches!(b, 0x81..=0x9F | 0xE0..=0xFC)
}

/// Plane 1 lead/trail pair to a 94×94 pointer.
fn plane1_pointer(lead: u8, trail: u8) -> u16 {
    let lead_offset = if lead < 0xA0 { 0x81 } else { 0xC1 };
    let trail_offset = if trail < 0x7F { 0x40 } else { 0x41 };
    (lead - lead_offset) as u16 * 188 + (trail - trail_offset) as u16
}

/// Plane 1 pointer back to a lead/trail pair.
fn plane1_bytes(ptr: u16) -> (u8, u8) {
    let lead = ptr / 188;
    let lead_offset = if lead < 0x1F { 0x81 } else { 0xC1 };
    let trail = ptr % 188;
    let trail_offset = if trail < 0x3F { 0x40 } else { 0x41 };
    ((lead + lead_offset) as u8, (trail + trail_offset) as u8)
}

/// Plane 2 lead/trail pair to a 94×94 pointer.
fn plane2_pointer(lead: u8, trail: u8) -> u16 {
    let (first, second) = PLANE2_ROWS[(lead - 0xF0) as usize];
    let (row, cell) = if trail < 0x9F {
        let trail_offset = if trail < 0x7F { 0x40 } else { 0x41 };
        (first, (trail - trail_offset) as u16)
    } else {
        (second, (trail - 0x9F) as u16)
    };
    (row - 1) * 94 + cell
}

/// Plane 2 pointer back to a lead/trail pair.
fn plane2_bytes(ptr: u16) -> (u8, u8) {
    let row = ptr / 94 + 1;
    let cell = ptr % 94;
    for (i, &(first, second)) in PLANE2_ROWS.iter().enumerate() {
        if row == first {
            let trail_offset = if cell < 0x3F { 0x40 } else { 0x41 };
            return ((0xF0 + i) as u8, (cell + trail_offset) as u8);
        }
        if row == second {
            return ((0xF0 + i) as u8, (cell + 0x9F) as u8);
        }
    }
    unreachable!("plane 2 pointer {} outside the shift rows", ptr)
}

pub struct Sjis0213Codec;

impl Codec for Sjis0213Codec {
    fn name(&self) -> &'static str {
        "x-sjis-0213"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["shift_jis-2004", "sjis-0213", "x-sjis0213"]
    }
    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(Sjis0213Decoder)
    }
    fn encoder(&self) -> Option<Box<dyn Encoder>> {
        Some(Box::new(Sjis0213Encoder { pending: None }))
    }
}

/// A decoder for Shift_JIS-2004.
pub struct Sjis0213Decoder;

impl Sjis0213Decoder {
    /// The unmappable length for a well-formed pair both planes miss.
    /// If the trail byte could itself open a double-byte group only the
    /// lead is blamed, so legacy diagnostic byte offsets are preserved;
    /// re-deriving this from first principles would change them.
    fn unmappable_len(trail: u8) -> usize {
        if is_lead(trail) {
            1
        } else {
            2
        }
    }
}

impl Decoder for Sjis0213Decoder {
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
                0x81..=0x9F | 0xE0..=0xFC => {
                    let trail = match src.peek(1) {
                        Some(b) => b,
                        None => return CoderResult::Underflow,
                    };
                    if !is_trail(trail) {
                        return CoderResult::Malformed(1);
                    }
                    let mapped = if lead < 0xF0 {
                        tables::jis0213_plane1().forward(plane1_pointer(lead, trail))
                    } else {
                        tables::jis0213_plane2().forward(plane2_pointer(lead, trail))
                    };
                    match mapped {
                        Mapped::Unmapped => {
                            return CoderResult::Unmappable(Self::unmappable_len(trail))
                        }
                        Mapped::One(unit) => {
                            if dst.remaining() < 1 {
                                return CoderResult::Overflow;
                            }
                            dst.push(unit);
                            src.advance(2);
                        }
                        Mapped::Pair(hi, lo) | Mapped::Composite(hi, lo) => {
                            if dst.remaining() < 2 {
                                return CoderResult::Overflow;
                            }
                            dst.push(hi);
                            dst.push(lo);
                            src.advance(2);
                        }
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

/// An encoder for Shift_JIS-2004 with one character of lookahead.
pub struct Sjis0213Encoder {
    /// A composite base seen but not yet written: the next character
    /// decides whether it becomes a composite pointer or its own code.
    pending: Option<u16>,
}

impl Sjis0213Encoder {
    /// The byte pair (or single byte) for one unit, ignoring composites.
    fn single_bytes(unit: u16) -> Option<(u8, Option<u8>)> {
        match unit {
            0x0000..=0x007F => Some((unit as u8, None)),
            0x00A5 => Some((0x5C, None)),
            0x203E => Some((0x7E, None)),
            0xFF61..=0xFF9F => Some(((unit - 0xFF61 + 0xA1) as u8, None)),
            _ => {
                if let Some(ptr) = tables::jis0213_plane1().backward(unit) {
                    let (lead, trail) = plane1_bytes(ptr);
                    return Some((lead, Some(trail)));
                }
                let ptr = tables::jis0213_plane2().backward(unit)?;
                let (lead, trail) = plane2_bytes(ptr);
                Some((lead, Some(trail)))
            }
        }
    }

    /// Writes a staged byte pair if it fits.
    fn commit(bytes: (u8, Option<u8>), dst: &mut Sink<'_, u8>) -> Option<CoderResult> {
        let len = if bytes.1.is_some() { 2 } else { 1 };
        if dst.remaining() < len {
            return Some(CoderResult::Overflow);
        }
        dst.push(bytes.0);
        if let Some(trail) = bytes.1 {
            dst.push(trail);
        }
        None
    }
}

impl Encoder for Sjis0213Encoder {
    fn encode(&mut self, src: &mut Source<'_, u16>, dst: &mut Sink<'_, u8>) -> CoderResult {
        while let Some(unit) = src.peek(0) {
            if let Some(base) = self.pending {
                if let Some(ptr) = tables::jis0213_plane1().backward_composite(base, unit) {
                    let (lead, trail) = plane1_bytes(ptr);
                    if dst.remaining() < 2 {
                        return CoderResult::Overflow;
                    }
                    dst.push(lead);
                    dst.push(trail);
                    self.pending = None;
                    src.advance(1);
                    continue;
                }
                // not a registered combination: the base stands alone and
                // the current character is re-examined from scratch
                let bytes = match Self::single_bytes(base) {
                    Some(bytes) => bytes,
                    None => return CoderResult::Unmappable(1),
                };
                if let Some(res) = Self::commit(bytes, dst) {
                    return res;
                }
                self.pending = None;
                continue;
            }
            if util::is_high_surrogate(unit) {
                let low = match src.peek(1) {
                    None => return CoderResult::Underflow,
                    Some(low) if util::is_low_surrogate(low) => low,
                    Some(_) => return CoderResult::Malformed(1),
                };
                let cp = util::combine_surrogates(unit, low);
                let ptr = tables::jis0213_plane1()
                    .backward_wide(cp)
                    .map(|ptr| (ptr, true))
                    .or_else(|| tables::jis0213_plane2().backward_wide(cp).map(|ptr| (ptr, false)));
                match ptr {
                    Some((ptr, plane1)) => {
                        let (lead, trail) = if plane1 { plane1_bytes(ptr) } else { plane2_bytes(ptr) };
                        if dst.remaining() < 2 {
                            return CoderResult::Overflow;
                        }
                        dst.push(lead);
                        dst.push(trail);
                        src.advance(2);
                    }
                    None => return CoderResult::Unmappable(2),
                }
                continue;
            }
            if util::is_low_surrogate(unit) {
                return CoderResult::Malformed(1);
            }
            if tables::jis0213_plane1().is_composite_base(unit) {
                self.pending = Some(unit);
                src.advance(1);
                continue;
            }
            let bytes = match Self::single_bytes(unit) {
                Some(bytes) => bytes,
                None => return CoderResult::Unmappable(1),
            };
            if let Some(res) = Self::commit(bytes, dst) {
                return res;
            }
            src.advance(1);
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, dst: &mut Sink<'_, u8>) -> CoderResult {
        // a composite base is independently legal at end of stream
        if let Some(base) = self.pending {
            if let Some(bytes) = Self::single_bytes(base) {
                if let Some(res) = Self::commit(bytes, dst) {
                    return res;
                }
            }
            self.pending = None;
        }
        CoderResult::Underflow
    }

    fn reset(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::japanese::{check_incremental, check_table_round_trip};
    use super::*;

    #[test]
    fn test_decoder_plane1() {
        let mut d = Sjis0213Codec.decoder();
        assert_feed_ok!(d, [0x41, 0x82, 0xA0, 0xC6], [], "A\u{3042}\u{ff86}");
        // JIS X 0213 plane 1 additions over JIS X 0208
        assert_feed_ok!(d, [0x82, 0xF2], [], "\u{3094}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_surrogate_pair() {
        let mut d = Sjis0213Codec.decoder();
        assert_feed_ok!(d, [0x98, 0x73], [], "\u{20b9f}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_composite() {
        let mut d = Sjis0213Codec.decoder();
        // one byte pair decodes to base plus combining mark
        assert_feed_ok!(d, [0x82, 0xF5], [], "\u{304b}\u{309a}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_unmappable_length_heuristic() {
        // trail could not start a pair: both bytes are blamed
        let mut d = Sjis0213Codec.decoder();
        assert_feed_err!(d, CoderResult::Unmappable(2), [0x9F, 0x40], [0x9F, 0x40], "");
        // trail doubles as a plausible lead: only the lead is blamed
        let mut d = Sjis0213Codec.decoder();
        assert_feed_err!(d, CoderResult::Unmappable(1), [0x9F, 0x81], [0x9F, 0x81], "");
    }

    #[test]
    fn test_decoder_incomplete_group_left_unconsumed() {
        let mut d = Sjis0213Codec.decoder();
        assert_feed_ok!(d, [0x82, 0xA0, 0x98], [0x98], "\u{3042}");
        assert_feed_ok!(d, [0x98, 0x73], [], "\u{20b9f}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_encoder_basic() {
        let mut e = Sjis0213Codec.encoder().unwrap();
        assert_feed_ok!(e, "A\u{3042}\u{ff86}", "", [0x41, 0x82, 0xA0, 0xC6]);
        assert_feed_ok!(e, "\u{20b9f}", "", [0x98, 0x73]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_composite_pair() {
        let mut e = Sjis0213Codec.encoder().unwrap();
        assert_feed_ok!(e, "\u{304b}\u{309a}", "", [0x82, 0xF5]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_base_followed_by_plain_character() {
        // the buffered base is flushed as its own code and the follower
        // encoded independently
        let mut e = Sjis0213Codec.encoder().unwrap();
        assert_feed_ok!(e, "\u{304b}X", "", [0x82, 0xA9, 0x58]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_base_buffered_across_calls() {
        let mut e = Sjis0213Codec.encoder().unwrap();
        assert_feed_ok!(e, "\u{304b}", "", []);
        assert_feed_ok!(e, "\u{309a}", "", [0x82, 0xF5]);
        assert_feed_ok!(e, "\u{304b}", "", []);
        assert_feed_ok!(e, "\u{304b}", "", [0x82, 0xA9]);
        assert_finish_ok!(e, [0x82, 0xA9]);
    }

    #[test]
    fn test_encoder_flush_emits_buffered_base() {
        let mut e = Sjis0213Codec.encoder().unwrap();
        assert_feed_ok!(e, "\u{304b}", "", []);
        assert_finish_ok!(e, [0x82, 0xA9]);
    }

    #[test]
    fn test_encoder_surrogate_handling() {
        let mut e = Sjis0213Codec.encoder().unwrap();
        // a high surrogate at the true end of input may yet be completed
        assert_feed_ok!(e, "", "", []);
        let units = [0xD842u16];
        let mut src = Source::new(&units);
        let mut buf = [0u8; 16];
        let mut dst = Sink::new(&mut buf);
        assert_eq!(e.encode(&mut src, &mut dst), CoderResult::Underflow);
        assert_eq!(src.position(), 0);

        // an isolated low surrogate is malformed
        let units = [0xDF9Fu16, 0x0041];
        let mut src = Source::new(&units);
        let mut dst = Sink::new(&mut buf);
        assert_eq!(e.encode(&mut src, &mut dst), CoderResult::Malformed(1));

        // a high surrogate with a non-low successor is malformed
        let units = [0xD842u16, 0x0041];
        let mut src = Source::new(&units);
        let mut dst = Sink::new(&mut buf);
        assert_eq!(e.encode(&mut src, &mut dst), CoderResult::Malformed(1));
    }

    #[test]
    fn test_incremental() {
        check_incremental(&Sjis0213Codec, &[0x41, 0x82, 0xA0, 0x82, 0xF5, 0x98, 0x73, 0x42]);
    }

    #[test]
    fn test_table_round_trip() {
        check_table_round_trip(&Sjis0213Codec, tables::jis0213_plane1());
    }

    #[test]
    fn test_composite_round_trip() {
        let text = "\u{304b}\u{309a}\u{30c4}\u{309a}";
        let encoded = Sjis0213Codec.encode(text, EncoderTrap::Strict).unwrap();
        assert_eq!(encoded, [0x82, 0xF5, 0x83, 0x9D]);
        assert_eq!(Sjis0213Codec.decode(&encoded, DecoderTrap::Strict).unwrap(), text);
    }
}
