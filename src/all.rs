// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

//! A list of all supported codecs. Useful for codecs fixed in the
//! compile time; run-time lookup by name or alias goes through the
//! `registry` module instead.

use crate::codec::autodetect::JisAutoDetectCodec;
use crate::codec::iscii::IsciiCodec;
use crate::codec::iso2022::{
    Iso2022Codec, ISO_2022_CN_VARIANT, ISO_2022_JP_VARIANT, ISO_2022_KR_VARIANT,
};
use crate::codec::japanese::{EucJpCodec, ShiftJisCodec};
use crate::codec::sjis0213::Sjis0213Codec;
use crate::types::CodecRef;

pub static EUC_JP: CodecRef = &EucJpCodec;
pub static SHIFT_JIS: CodecRef = &ShiftJisCodec;
pub static X_SJIS_0213: CodecRef = &Sjis0213Codec;
pub static ISO_2022_JP: CodecRef = &Iso2022Codec::new(&ISO_2022_JP_VARIANT);
pub static ISO_2022_KR: CodecRef = &Iso2022Codec::new(&ISO_2022_KR_VARIANT);
pub static ISO_2022_CN: CodecRef = &Iso2022Codec::new(&ISO_2022_CN_VARIANT);
pub static X_ISCII91: CodecRef = &IsciiCodec;
pub static X_JIS_AUTO_DETECT: CodecRef = &JisAutoDetectCodec;

/// Returns every built-in codec, in a stable order.
pub fn codecs() -> Vec<CodecRef> {
    vec![
        EUC_JP,
        SHIFT_JIS,
        X_SJIS_0213,
        ISO_2022_JP,
        ISO_2022_KR,
        ISO_2022_CN,
        X_ISCII91,
        X_JIS_AUTO_DETECT,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Codec;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = codecs().iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), codecs().len());
    }

    #[test]
    fn test_every_codec_but_the_detector_encodes() {
        for codec in codecs() {
            let has_encoder = codec.encoder().is_some();
            assert_eq!(has_encoder, codec.name() != "x-jis-auto-detect", "{}", codec.name());
        }
    }
}
