// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

/*!

# Textcode

Incremental codecs for legacy East-Asian and Indic text encodings:
the ISO-2022 family (JP/KR/CN), EUC-JP, Shift_JIS and Shift_JIS-2004
(JIS X 0213), and ISCII-91, plus a heuristic detector for the Japanese
encodings. Every codec is a resumable state machine over caller-owned
buffers; escape sequences, shift states and composing lookahead survive
across calls, so input can arrive in arbitrary chunks.

## Simple usage

To decode a whole byte buffer:

~~~~ {.rust}
use textcode::{Codec, DecoderTrap};
use textcode::all::EUC_JP;

assert_eq!(EUC_JP.decode(&[0xa4, 0xcb, 0xa4, 0xdb, 0xa4, 0xf3], DecoderTrap::Strict),
           Ok("\u{306b}\u{307b}\u{3093}".to_string()));
~~~~

To encode a string with unrepresentable characters:

~~~~ {.rust}
use textcode::{Codec, EncoderTrap};
use textcode::all::ISO_2022_JP;

assert!(ISO_2022_JP.encode("Acme\u{a9}", EncoderTrap::Strict).is_err());
assert_eq!(ISO_2022_JP.encode("Acme\u{a9}", EncoderTrap::Replace),
           Ok(vec![0x41, 0x63, 0x6d, 0x65, 0x3f]));
~~~~

Looking a codec up by name or alias:

~~~~ {.rust}
use textcode::Codec;
use textcode::registry::registry;

let codec = registry().lookup("csISO2022KR").unwrap();
assert_eq!(codec.name(), "iso-2022-kr");
~~~~

## Incremental usage

`Codec::decoder` and `Codec::encoder` return fresh incremental coders.
Each `decode`/`encode` call works over a `Source` and a `Sink` cursor
and reports one `CoderResult`; see the `types` module for the exact
cursor positioning contract. `Overflow` and `Underflow` are ordinary
resumption points, and `Malformed`/`Unmappable` carry the offending
length so callers can skip and substitute deterministically.

Decoders and encoders own their state exclusively and are not meant to
be shared; codec values themselves are stateless and can be used from
any number of threads at once.

*/

pub use crate::types::{
    Codec, CodecRef, CoderResult, ConvertError, Decoder, DecoderTrap, Encoder, EncoderTrap, Sink,
    Source,
}; // reexport

mod util;
#[cfg(test)]
#[macro_use]
mod testutils;

pub mod types;

/// Shared code point tables, expanded from the index crates. Semi-internal.
pub mod tables;

/// Codec implementations.
pub mod codec {
    pub mod autodetect;
    pub mod iscii;
    pub mod iso2022;
    pub mod japanese;
    pub mod sjis0213;
}

pub mod all;
pub mod registry;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme() {
        assert_eq!(
            all::EUC_JP.decode(&[0xa4, 0xcb, 0xa4, 0xdb, 0xa4, 0xf3], DecoderTrap::Strict),
            Ok("\u{306b}\u{307b}\u{3093}".to_string())
        );

        assert!(all::ISO_2022_JP.encode("Acme\u{a9}", EncoderTrap::Strict).is_err());
        assert_eq!(
            all::ISO_2022_JP.encode("Acme\u{a9}", EncoderTrap::Replace),
            Ok(vec![0x41, 0x63, 0x6d, 0x65, 0x3f])
        );

        let codec = registry::registry().lookup("csISO2022KR").unwrap();
        assert_eq!(codec.name(), "iso-2022-kr");
    }
}
