// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

/*!
 * The ISO-2022 family: stateful 7-bit encodings multiplexing several
 * character sets through escape designator sequences and shift bytes.
 *
 * One generic state machine serves every variant; a variant is just a
 * static configuration naming the recognized designator sequences, the
 * shift features on the wire, and the repertoire the encoder may emit.
 * The designator tables are the observable wire format and are
 * reproduced byte for byte.
 */

use crate::tables::{self, Mapped, PairTable};
use crate::types::*;

use super::japanese::check_surrogates;

const ESC: u8 = 0x1B;
const SO: u8 = 0x0E;
const SI: u8 = 0x0F;

/// One of the character sets designatable on an ISO-2022 wire.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Charset {
    Ascii,
    /// JIS X 0201 lower half: ASCII with yen sign and overline.
    Jis0201Roman,
    /// JIS X 0201 upper half: half-width katakana, shifted to `[21-5F]`.
    Jis0201Kana,
    /// JIS X 0208, both the 1978 and 1983 revisions.
    Jis0208,
    Jis0212,
    Gb2312,
    Ksc5601,
    Cns11643Plane1,
    Cns11643Plane2,
    Cns11643Plane3,
}

impl Charset {
    fn table(&self) -> Option<&'static PairTable> {
        match self {
            Charset::Ascii | Charset::Jis0201Roman | Charset::Jis0201Kana => None,
            Charset::Jis0208 => Some(tables::jis0208()),
            Charset::Jis0212 => Some(tables::jis0212()),
            Charset::Gb2312 => Some(tables::gb2312()),
            Charset::Ksc5601 => Some(tables::ksc5601()),
            Charset::Cns11643Plane1 => Some(tables::cns11643_plane1()),
            Charset::Cns11643Plane2 => Some(tables::cns11643_plane2()),
            Charset::Cns11643Plane3 => Some(tables::cns11643_plane3()),
        }
    }
}

/// The designation slot an escape sequence writes to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Slot {
    /// The active single-shift-in set (the JP family designates here).
    G0,
    /// The set activated by `SO`.
    So,
    /// The set addressed by the `ESC N` single shift.
    Ss2,
    /// The set addressed by the `ESC O` single shift.
    Ss3,
}

/// A static variant configuration consumed by the generic state machine.
pub struct Iso2022Variant {
    name: &'static str,
    aliases: &'static [&'static str],
    /// Recognized designator sequences: the bytes following `ESC`, the
    /// slot written, and the charset designated. The encoder emits the
    /// first entry naming its charset, so preferred spellings come first.
    designations: &'static [(&'static [u8], Slot, Charset)],
    /// Whether `SO`/`SI` are part of the wire format.
    shifting: bool,
    /// Whether the `ESC N`/`ESC O` single shifts are part of the wire
    /// format.
    single_shifts: bool,
    /// Charsets the encoder may designate, in preference order. Sets
    /// designated for decoding only (e.g. JIS X 0212, the CNS planes)
    /// are absent here.
    enc_charsets: &'static [Charset],
}

/// ISO-2022-JP (RFC 1468 plus the usual JIS X 0201/0212 extensions).
/// JIS X 0212 is supported on decode only.
pub static ISO_2022_JP_VARIANT: Iso2022Variant = Iso2022Variant {
    name: "iso-2022-jp",
    aliases: &["iso2022jp", "csiso2022jp"],
    designations: &[
        (b"(B", Slot::G0, Charset::Ascii),
        (b"(J", Slot::G0, Charset::Jis0201Roman),
        (b"(I", Slot::G0, Charset::Jis0201Kana),
        (b"$B", Slot::G0, Charset::Jis0208),
        (b"$@", Slot::G0, Charset::Jis0208),
        (b"$(D", Slot::G0, Charset::Jis0212),
    ],
    shifting: false,
    single_shifts: false,
    enc_charsets: &[Charset::Jis0201Roman, Charset::Jis0201Kana, Charset::Jis0208],
};

/// ISO-2022-KR (RFC 1557).
pub static ISO_2022_KR_VARIANT: Iso2022Variant = Iso2022Variant {
    name: "iso-2022-kr",
    aliases: &["iso2022kr", "csiso2022kr"],
    designations: &[(b"$)C", Slot::So, Charset::Ksc5601)],
    shifting: true,
    single_shifts: false,
    enc_charsets: &[Charset::Ksc5601],
};

/// ISO-2022-CN (RFC 1922). The CNS 11643 planes are decode-only; the
/// encoder emits the GB 2312 repertoire.
pub static ISO_2022_CN_VARIANT: Iso2022Variant = Iso2022Variant {
    name: "iso-2022-cn",
    aliases: &["iso2022cn", "csiso2022cn"],
    designations: &[
        (b"$)A", Slot::So, Charset::Gb2312),
        (b"$)G", Slot::So, Charset::Cns11643Plane1),
        (b"$*H", Slot::Ss2, Charset::Cns11643Plane2),
        (b"$+I", Slot::Ss3, Charset::Cns11643Plane3),
    ],
    shifting: true,
    single_shifts: true,
    enc_charsets: &[Charset::Gb2312],
};

/// A codec for one ISO-2022 variant.
pub struct Iso2022Codec {
    variant: &'static Iso2022Variant,
}

impl Iso2022Codec {
    pub const fn new(variant: &'static Iso2022Variant) -> Iso2022Codec {
        Iso2022Codec { variant }
    }
}

impl Codec for Iso2022Codec {
    fn name(&self) -> &'static str {
        self.variant.name
    }
    fn aliases(&self) -> &'static [&'static str] {
        self.variant.aliases
    }
    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(Iso2022Decoder::new(self.variant))
    }
    fn encoder(&self) -> Option<Box<dyn Encoder>> {
        Some(Box::new(Iso2022Encoder::new(self.variant)))
    }
}

/// The decode-side state machine: designation slots, the shift flag,
/// and nothing else. Incomplete escape or byte groups are left
/// unconsumed in the source rather than buffered.
pub struct Iso2022Decoder {
    variant: &'static Iso2022Variant,
    g0: Charset,
    so: Option<Charset>,
    ss2: Option<Charset>,
    ss3: Option<Charset>,
    shifted_out: bool,
}

impl Iso2022Decoder {
    pub fn new(variant: &'static Iso2022Variant) -> Iso2022Decoder {
        Iso2022Decoder { variant, g0: Charset::Ascii, so: None, ss2: None, ss3: None, shifted_out: false }
    }

    /// Designations do not survive a line break on the wire.
    fn reset_line(&mut self) {
        self.g0 = Charset::Ascii;
        self.so = None;
        self.ss2 = None;
        self.ss3 = None;
        self.shifted_out = false;
    }

    /// Matches the designator table against the bytes after `ESC`,
    /// narrowing candidates byte by byte. `Underflow` while candidates
    /// remain, `Malformed` over the examined prefix once none do.
    fn designate(&mut self, src: &mut Source<'_, u8>) -> Option<CoderResult> {
        let designations = self.variant.designations;
        let mut live = (1u32 << designations.len()) - 1;
        let mut matched = 0;
        loop {
            let b = match src.peek(1 + matched) {
                Some(b) => b,
                None => return Some(CoderResult::Underflow),
            };
            for (i, (suffix, _, _)) in designations.iter().enumerate() {
                if live & (1 << i) != 0 && suffix.get(matched) != Some(&b) {
                    live &= !(1 << i);
                }
            }
            if live == 0 {
                return Some(CoderResult::Malformed(matched + 2));
            }
            matched += 1;
            let done = designations
                .iter()
                .enumerate()
                .find(|(i, (suffix, _, _))| live & (1 << i) != 0 && suffix.len() == matched);
            if let Some((_, &(_, slot, charset))) = done {
                match slot {
                    Slot::G0 => self.g0 = charset,
                    Slot::So => self.so = Some(charset),
                    Slot::Ss2 => self.ss2 = Some(charset),
                    Slot::Ss3 => self.ss3 = Some(charset),
                }
                src.advance(1 + matched);
                return None;
            }
        }
    }

    /// Decodes one `ESC N`/`ESC O` single-shifted pair as an atomic
    /// four-byte group.
    fn single_shift(
        &mut self,
        src: &mut Source<'_, u8>,
        dst: &mut Sink<'_, u16>,
        charset: Option<Charset>,
    ) -> Option<CoderResult> {
        let charset = match charset {
            Some(cs) => cs,
            None => return Some(CoderResult::Malformed(2)),
        };
        let b1 = match src.peek(2) {
            Some(b) => b,
            None => return Some(CoderResult::Underflow),
        };
        if !(0x21..=0x7E).contains(&b1) {
            return Some(CoderResult::Malformed(2));
        }
        let b2 = match src.peek(3) {
            Some(b) => b,
            None => return Some(CoderResult::Underflow),
        };
        if !(0x21..=0x7E).contains(&b2) {
            return Some(CoderResult::Malformed(3));
        }
        match push_pair(charset, b1, b2, dst) {
            None => {
                src.advance(4);
                None
            }
            Some(CoderResult::Unmappable(_)) => Some(CoderResult::Unmappable(4)),
            Some(other) => Some(other),
        }
    }
}

/// Probes `charset`'s table for a byte pair and writes the result,
/// without consuming the source. `None` on success.
fn push_pair(charset: Charset, b1: u8, b2: u8, dst: &mut Sink<'_, u16>) -> Option<CoderResult> {
    let ptr = (b1 - 0x21) as u16 * 94 + (b2 - 0x21) as u16;
    let table = charset.table().expect("single-byte charset in a double-byte position");
    match table.forward(ptr) {
        Mapped::Unmapped => Some(CoderResult::Unmappable(2)),
        Mapped::One(unit) => {
            if dst.remaining() < 1 {
                return Some(CoderResult::Overflow);
            }
            dst.push(unit);
            None
        }
        Mapped::Pair(hi, lo) => {
            if dst.remaining() < 2 {
                return Some(CoderResult::Overflow);
            }
            dst.push(hi);
            dst.push(lo);
            None
        }
        Mapped::Composite(base, mark) => {
            if dst.remaining() < 2 {
                return Some(CoderResult::Overflow);
            }
            dst.push(base);
            dst.push(mark);
            None
        }
    }
}

impl Decoder for Iso2022Decoder {
    fn decode(&mut self, src: &mut Source<'_, u8>, dst: &mut Sink<'_, u16>) -> CoderResult {
        while let Some(b) = src.peek(0) {
            match b {
                ESC => {
                    let next = match src.peek(1) {
                        Some(b) => b,
                        None => return CoderResult::Underflow,
                    };
                    let res = if self.variant.single_shifts && next == b'N' {
                        self.single_shift(src, dst, self.ss2)
                    } else if self.variant.single_shifts && next == b'O' {
                        self.single_shift(src, dst, self.ss3)
                    } else {
                        self.designate(src)
                    };
                    if let Some(res) = res {
                        return res;
                    }
                }
                SO if self.variant.shifting => {
                    if self.so.is_none() {
                        return CoderResult::Malformed(1);
                    }
                    self.shifted_out = true;
                    src.advance(1);
                }
                SI if self.variant.shifting => {
                    self.shifted_out = false;
                    src.advance(1);
                }
                0x0A | 0x0D => {
                    if dst.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    dst.push(b as u16);
                    src.advance(1);
                    self.reset_line();
                }
                _ => {
                    let charset = if self.shifted_out {
                        self.so.expect("shifted out without a designation")
                    } else {
                        self.g0
                    };
                    match charset {
                        Charset::Ascii => {
                            if b >= 0x80 {
                                return CoderResult::Malformed(1);
                            }
                            if dst.remaining() < 1 {
                                return CoderResult::Overflow;
                            }
                            dst.push((b & 0x7F) as u16);
                            src.advance(1);
                        }
                        Charset::Jis0201Roman => {
                            if b >= 0x80 {
                                return CoderResult::Malformed(1);
                            }
                            if dst.remaining() < 1 {
                                return CoderResult::Overflow;
                            }
                            dst.push(match b {
                                0x5C => 0x00A5,
                                0x7E => 0x203E,
                                _ => (b & 0x7F) as u16,
                            });
                            src.advance(1);
                        }
                        Charset::Jis0201Kana => match b {
                            0x20 => {
                                if dst.remaining() < 1 {
                                    return CoderResult::Overflow;
                                }
                                dst.push(0x0020);
                                src.advance(1);
                            }
                            0x21..=0x5F => {
                                if dst.remaining() < 1 {
                                    return CoderResult::Overflow;
                                }
                                dst.push(0xFF61 + (b - 0x21) as u16);
                                src.advance(1);
                            }
                            _ => return CoderResult::Malformed(1),
                        },
                        _ => {
                            if !(0x21..=0x7E).contains(&b) {
                                return CoderResult::Malformed(1);
                            }
                            let b2 = match src.peek(1) {
                                Some(b) => b,
                                None => return CoderResult::Underflow,
                            };
                            if !(0x21..=0x7E).contains(&b2) {
                                return CoderResult::Malformed(1);
                            }
                            if let Some(res) = push_pair(charset, b, b2, dst) {
                                return res;
                            }
                            src.advance(2);
                        }
                    }
                }
            }
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, _dst: &mut Sink<'_, u16>) -> CoderResult {
        self.reset();
        CoderResult::Underflow
    }

    fn reset(&mut self) {
        self.reset_line();
    }
}

/// The encode-side state machine: remembers the last-written designator
/// and shift state to avoid redundant re-emission, and forgets both at
/// every line break so each line re-designates from scratch.
pub struct Iso2022Encoder {
    variant: &'static Iso2022Variant,
    g0: Charset,
    so: Option<Charset>,
    shifted_out: bool,
}

impl Iso2022Encoder {
    pub fn new(variant: &'static Iso2022Variant) -> Iso2022Encoder {
        Iso2022Encoder { variant, g0: Charset::Ascii, so: None, shifted_out: false }
    }

    /// The designator spelling for `charset`: the first entry naming it.
    fn designator(&self, charset: Charset) -> (&'static [u8], Slot) {
        self.variant
            .designations
            .iter()
            .find(|(_, _, cs)| *cs == charset)
            .map(|&(suffix, slot, _)| (suffix, slot))
            .expect("encoder charset without a designation")
    }

    /// The bytes a `charset` needs for `unit`, excluding designators and
    /// shifts, or `None` if the charset cannot express it.
    fn payload(&self, charset: Charset, unit: u16) -> Option<Payload> {
        match charset {
            Charset::Ascii => None,
            Charset::Jis0201Roman => match unit {
                0x00A5 => Some(Payload::One(0x5C)),
                0x203E => Some(Payload::One(0x7E)),
                _ => None,
            },
            Charset::Jis0201Kana => match unit {
                0xFF61..=0xFF9F => Some(Payload::One((unit - 0xFF61 + 0x21) as u8)),
                _ => None,
            },
            _ => {
                let ptr = charset.table().unwrap().backward(unit)?;
                Some(Payload::Two(0x21 + (ptr / 94) as u8, 0x21 + (ptr % 94) as u8))
            }
        }
    }
}

enum Payload {
    One(u8),
    Two(u8, u8),
}

/// A staged byte sequence for one input character: designator, shift
/// and payload bytes, written only once the whole group is known to fit.
struct Staged {
    buf: [u8; 8],
    len: usize,
}

impl Staged {
    fn new() -> Staged {
        Staged { buf: [0; 8], len: 0 }
    }

    fn push(&mut self, b: u8) {
        self.buf[self.len] = b;
        self.len += 1;
    }

    fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }

    /// Writes the staged bytes if they fit.
    fn commit(&self, dst: &mut Sink<'_, u8>) -> Option<CoderResult> {
        if dst.remaining() < self.len {
            return Some(CoderResult::Overflow);
        }
        for &b in &self.buf[..self.len] {
            dst.push(b);
        }
        None
    }
}

impl Encoder for Iso2022Encoder {
    fn encode(&mut self, src: &mut Source<'_, u16>, dst: &mut Sink<'_, u8>) -> CoderResult {
        while let Some(unit) = src.peek(0) {
            let mut staged = Staged::new();
            if unit == 0x000A || unit == 0x000D {
                // the designations die with the line; the decoder forgets
                // them at the same point, so nothing needs to be emitted
                staged.push(unit as u8);
                if let Some(res) = staged.commit(dst) {
                    return res;
                }
                self.g0 = Charset::Ascii;
                self.so = None;
                self.shifted_out = false;
                src.advance(1);
            } else if unit < 0x0080 {
                if self.shifted_out {
                    staged.push(SI);
                }
                if self.g0 != Charset::Ascii {
                    let (suffix, _) = self.designator(Charset::Ascii);
                    staged.push(ESC);
                    staged.extend(suffix);
                }
                staged.push(unit as u8);
                if let Some(res) = staged.commit(dst) {
                    return res;
                }
                self.shifted_out = false;
                self.g0 = Charset::Ascii;
                src.advance(1);
            } else {
                if let Some(res) = check_surrogates(src, unit) {
                    return res;
                }
                let candidate = self
                    .variant
                    .enc_charsets
                    .iter()
                    .find_map(|&cs| self.payload(cs, unit).map(|payload| (cs, payload)));
                let (charset, payload) = match candidate {
                    Some(found) => found,
                    None => return CoderResult::Unmappable(1),
                };
                let (suffix, slot) = self.designator(charset);
                match slot {
                    Slot::G0 => {
                        if self.g0 != charset {
                            staged.push(ESC);
                            staged.extend(suffix);
                        }
                    }
                    Slot::So => {
                        if self.so != Some(charset) {
                            staged.push(ESC);
                            staged.extend(suffix);
                        }
                        if !self.shifted_out {
                            staged.push(SO);
                        }
                    }
                    Slot::Ss2 | Slot::Ss3 => unreachable!("single-shift sets are decode-only"),
                }
                match payload {
                    Payload::One(b) => staged.push(b),
                    Payload::Two(b1, b2) => {
                        staged.push(b1);
                        staged.push(b2);
                    }
                }
                if let Some(res) = staged.commit(dst) {
                    return res;
                }
                match slot {
                    Slot::G0 => self.g0 = charset,
                    Slot::So => {
                        self.so = Some(charset);
                        self.shifted_out = true;
                    }
                    Slot::Ss2 | Slot::Ss3 => unreachable!(),
                }
                src.advance(1);
            }
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, dst: &mut Sink<'_, u8>) -> CoderResult {
        let mut staged = Staged::new();
        if self.shifted_out {
            staged.push(SI);
        }
        if self.g0 != Charset::Ascii {
            let (suffix, _) = self.designator(Charset::Ascii);
            staged.push(ESC);
            staged.extend(suffix);
        }
        if let Some(res) = staged.commit(dst) {
            return res;
        }
        self.reset();
        CoderResult::Underflow
    }

    fn reset(&mut self) {
        self.g0 = Charset::Ascii;
        self.so = None;
        self.shifted_out = false;
    }
}

#[cfg(test)]
mod iso2022jp_tests {
    use super::super::japanese::{check_incremental, check_table_round_trip};
    use super::*;
    use crate::all::ISO_2022_JP;

    #[test]
    fn test_encoder_valid() {
        let mut e = ISO_2022_JP.encoder().unwrap();
        assert_feed_ok!(e, "A", "", [0x41]);
        assert_feed_ok!(e, "BC", "", [0x42, 0x43]);
        assert_feed_ok!(e, "\u{3042}", "", [0x1B, 0x24, 0x42, 0x24, 0x22]);
        // no re-designation inside a run
        assert_feed_ok!(e, "\u{65e5}\u{672c}", "", [0x46, 0x7C, 0x4B, 0x5C]);
        assert_feed_ok!(e, "A", "", [0x1B, 0x28, 0x42, 0x41]);
        assert_feed_ok!(e, "\u{a5}", "", [0x1B, 0x28, 0x4A, 0x5C]);
        assert_feed_ok!(e, "\u{ff86}", "", [0x1B, 0x28, 0x49, 0x46]);
        assert_finish_ok!(e, [0x1B, 0x28, 0x42]);
    }

    #[test]
    fn test_encoder_newline_forces_redesignation() {
        let mut e = ISO_2022_JP.encoder().unwrap();
        assert_feed_ok!(
            e,
            "\u{3042}\n\u{3042}",
            "",
            [0x1B, 0x24, 0x42, 0x24, 0x22, 0x0A, 0x1B, 0x24, 0x42, 0x24, 0x22]
        );
        assert_finish_ok!(e, [0x1B, 0x28, 0x42]);
    }

    #[test]
    fn test_encoder_flush_in_ascii_is_empty() {
        let mut e = ISO_2022_JP.encoder().unwrap();
        assert_feed_ok!(e, "A", "", [0x41]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_invalid() {
        let mut e = ISO_2022_JP.encoder().unwrap();
        assert_feed_err!(e, CoderResult::Unmappable(1), "\u{ac00}", "\u{ac00}", []);
        // JIS X 0212 is decode-only
        assert_feed_err!(e, CoderResult::Unmappable(1), "\u{736c}", "\u{736c}", []);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_decoder_valid() {
        let mut d = ISO_2022_JP.decoder();
        assert_feed_ok!(d, [0x41, 0x42], [], "AB");
        assert_feed_ok!(d, [0x1B, 0x24, 0x42, 0x24, 0x22, 0x46, 0x7C], [], "\u{3042}\u{65e5}");
        assert_feed_ok!(d, [0x1B, 0x28, 0x42, 0x41], [], "A");
        // the 1978 designation selects the same table
        assert_feed_ok!(d, [0x1B, 0x24, 0x40, 0x24, 0x22], [], "\u{3042}");
        assert_feed_ok!(d, [0x1B, 0x28, 0x4A, 0x5C, 0x7E], [], "\u{a5}\u{203e}");
        assert_feed_ok!(d, [0x1B, 0x28, 0x49, 0x46, 0x5F], [], "\u{ff86}\u{ff9f}");
        assert_feed_ok!(d, [0x1B, 0x28, 0x42], [], "");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_jis0212() {
        let mut d = ISO_2022_JP.decoder();
        assert_feed_ok!(d, [0x1B, 0x24, 0x28, 0x44, 0x4B, 0x46], [], "\u{736c}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_newline_resets_designation() {
        let mut d = ISO_2022_JP.decoder();
        // after LF the same bytes read as ASCII again
        assert_feed_ok!(d, [0x1B, 0x24, 0x42, 0x24, 0x22, 0x0A, 0x24, 0x22], [], "\u{3042}\n$\"");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_escape_underflow() {
        let mut d = ISO_2022_JP.decoder();
        assert_feed_ok!(d, [0x41, 0x1B], [0x1B], "A");
        assert_feed_ok!(d, [0x1B, 0x24], [0x1B, 0x24], "");
        assert_feed_ok!(d, [0x1B, 0x24, 0x28], [0x1B, 0x24, 0x28], "");
        assert_feed_ok!(d, [0x1B, 0x24, 0x28, 0x44, 0x4B, 0x46], [], "\u{736c}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_malformed_escape_reports_examined_length() {
        let mut d = ISO_2022_JP.decoder();
        assert_feed_err!(d, CoderResult::Malformed(2), [0x1B, 0x5A], [0x1B, 0x5A], "");
        let mut d = ISO_2022_JP.decoder();
        assert_feed_err!(d, CoderResult::Malformed(3), [0x1B, 0x24, 0x5A], [0x1B, 0x24, 0x5A], "");
        let mut d = ISO_2022_JP.decoder();
        assert_feed_err!(
            d,
            CoderResult::Malformed(4),
            [0x1B, 0x24, 0x28, 0x5A],
            [0x1B, 0x24, 0x28, 0x5A],
            ""
        );
    }

    #[test]
    fn test_decoder_unmappable_pair() {
        let mut d = ISO_2022_JP.decoder();
        assert_feed_err!(
            d,
            CoderResult::Unmappable(2),
            [0x1B, 0x24, 0x42, 0x22, 0x22],
            [0x22, 0x22],
            ""
        );
    }

    #[test]
    fn test_incremental() {
        check_incremental(
            &*ISO_2022_JP,
            &[
                0x41, 0x1B, 0x24, 0x42, 0x24, 0x22, 0x46, 0x7C, 0x1B, 0x28, 0x4A, 0x5C, 0x1B,
                0x28, 0x42, 0x42,
            ],
        );
    }

    #[test]
    fn test_table_round_trip() {
        check_table_round_trip(&*ISO_2022_JP, tables::jis0208());
    }
}
