// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

/*!
 * Heuristic detection of the Japanese encodings.
 *
 * The arbiter races candidate decoders against read-only copies of the
 * input. ISO-2022-JP goes first: its `ESC` designators make it
 * unambiguous, so a clean parse settles the question. Otherwise EUC-JP
 * and Shift_JIS are probed independently and the one that consumed more
 * bytes before stopping wins; an exact tie falls back to counting
 * fullwidth hiragana in the EUC-JP reading, which real Japanese text
 * has plenty of and misread Shift_JIS turns into half-width katakana.
 *
 * Once a probe picks a winner the instance delegates every further
 * call to it, until an explicit `reset`.
 */

use crate::all;
use crate::types::*;

pub struct JisAutoDetectCodec;

impl Codec for JisAutoDetectCodec {
    fn name(&self) -> &'static str {
        "x-jis-auto-detect"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["jis-auto-detect", "jisautodetect"]
    }
    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(JisAutoDetectDecoder { chosen: None })
    }
    /// Detection is one-directional; there is nothing to encode to.
    fn encoder(&self) -> Option<Box<dyn Encoder>> {
        None
    }
}

/// The result of one probe run: bytes consumed before stopping, the
/// decoded units, and whether the run ended without an error.
struct Probe {
    consumed: usize,
    units: Vec<u16>,
    clean: bool,
}

fn probe(codec: CodecRef, bytes: &[u8]) -> Probe {
    let mut decoder = codec.decoder();
    let mut src = Source::new(bytes);
    let mut units = Vec::new();
    let mut buf = [0u16; 256];
    let clean = loop {
        let mut dst = Sink::new(&mut buf);
        let res = decoder.decode(&mut src, &mut dst);
        units.extend_from_slice(dst.written());
        match res {
            CoderResult::Overflow => continue,
            // a trailing incomplete group is not evidence against
            CoderResult::Underflow => break true,
            CoderResult::Malformed(_) | CoderResult::Unmappable(_) => break false,
        }
    };
    Probe { consumed: src.position(), units, clean }
}

/// Picks the decoder for `bytes`, the first chunk of the stream.
fn detect(bytes: &[u8]) -> CodecRef {
    if probe(all::ISO_2022_JP, bytes).clean {
        log::debug!("auto-detect: iso-2022-jp parsed {} byte(s) cleanly", bytes.len());
        return all::ISO_2022_JP;
    }
    let euc = probe(all::EUC_JP, bytes);
    let sjis = probe(all::SHIFT_JIS, bytes);
    if euc.consumed != sjis.consumed {
        let winner = if euc.consumed > sjis.consumed { all::EUC_JP } else { all::SHIFT_JIS };
        log::debug!(
            "auto-detect: {} won on consumption ({} vs {} of {} byte(s))",
            winner.name(),
            euc.consumed,
            sjis.consumed,
            bytes.len()
        );
        return winner;
    }
    // exact tie: real Japanese read as EUC-JP shows fullwidth hiragana,
    // while the same bytes read as Shift_JIS collapse into half-width
    // katakana
    let hiragana = euc.units.iter().filter(|u| (0x3041..=0x309F).contains(*u)).count();
    let katakana = euc.units.iter().filter(|u| (0xFF61..=0xFF9F).contains(*u)).count();
    let winner = if hiragana > 1 { all::EUC_JP } else { all::SHIFT_JIS };
    log::debug!(
        "auto-detect: tie at {} byte(s), {} hiragana / {} half-width katakana, picked {}",
        euc.consumed,
        hiragana,
        katakana,
        winner.name()
    );
    winner
}

/// A decoder that defers to the winning probe.
pub struct JisAutoDetectDecoder {
    chosen: Option<Box<dyn Decoder>>,
}

impl Decoder for JisAutoDetectDecoder {
    fn decode(&mut self, src: &mut Source<'_, u8>, dst: &mut Sink<'_, u16>) -> CoderResult {
        if src.remaining() == 0 {
            return CoderResult::Underflow;
        }
        let decoder = match &mut self.chosen {
            Some(decoder) => decoder,
            None => self.chosen.insert(detect(src.rest()).decoder()),
        };
        decoder.decode(src, dst)
    }

    fn flush(&mut self, dst: &mut Sink<'_, u16>) -> CoderResult {
        match &mut self.chosen {
            Some(decoder) => decoder.flush(dst),
            None => CoderResult::Underflow,
        }
    }

    fn reset(&mut self) {
        self.chosen = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_name(bytes: &[u8]) -> &'static str {
        detect(bytes).name()
    }

    #[test]
    fn test_escape_always_wins() {
        // these bytes also parse as Shift_JIS ("$B$\"..."), but the
        // designator settles it
        let bytes = [0x1B, 0x24, 0x42, 0x24, 0x22, 0x1B, 0x28, 0x42];
        assert_eq!(detect_name(&bytes), "iso-2022-jp");
        let mut d = JisAutoDetectCodec.decoder();
        assert_feed_ok!(d, bytes, [], "\u{3042}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_consumption_race() {
        // 0x93 cannot start an EUC-JP group, so Shift_JIS runs further
        assert_eq!(detect_name(&[0x93, 0xFA, 0x96, 0x7B]), "shift_jis");
        // 0x8E-prefixed katakana is EUC-JP-only
        assert_eq!(detect_name(&[0x8E, 0xC6, 0x8E, 0xCE]), "euc-jp");
    }

    #[test]
    fn test_tie_breaks_on_hiragana() {
        // both readings consume everything; three hiragana pick EUC-JP
        assert_eq!(detect_name(&[0xA4, 0xCB, 0xA4, 0xDB, 0xA4, 0xF3]), "euc-jp");
        // a single hiragana is not enough evidence
        assert_eq!(detect_name(&[0xA4, 0xA2]), "shift_jis");
    }

    #[test]
    fn test_chosen_decoder_persists_until_reset() {
        let mut d = JisAutoDetectCodec.decoder();
        assert_feed_ok!(d, [0xA4, 0xCB, 0xA4, 0xDB, 0xA4, 0xF3], [], "\u{306b}\u{307b}\u{3093}");
        // still EUC-JP, even though these bytes alone look like Shift_JIS
        assert_feed_ok!(d, [0xC6, 0xFC], [], "\u{65e5}");
        d.reset();
        assert_feed_ok!(d, [0x93, 0xFA], [], "\u{65e5}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_no_encoder() {
        assert!(JisAutoDetectCodec.encoder().is_none());
    }

    #[test]
    fn test_whole_buffer_decode() {
        assert_eq!(
            JisAutoDetectCodec.decode(&[0x1B, 0x24, 0x42, 0x46, 0x7C, 0x4B, 0x5C], DecoderTrap::Strict),
            Ok("\u{65e5}\u{672c}".to_string())
        );
        assert_eq!(
            JisAutoDetectCodec.encode("x", EncoderTrap::Strict),
            Err(ConvertError::EncoderUnsupported("x-jis-auto-detect"))
        );
    }
}
