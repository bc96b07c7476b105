// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

/*!
 * Run-time codec lookup by canonical name or alias.
 *
 * The registry is an explicit object built once at first use from the
 * static codec list in `all`; there is no reflective instantiation and
 * no global mutable cache beyond the registry's own resolution map.
 * Matching is ASCII-case-insensitive and ignores surrounding whitespace,
 * which is how the labels show up in mail headers and HTML attributes.
 *
 * Resolution results are memoized under a mutex. Codec values are
 * stateless, so the lock covers only the name lookup; decoding and
 * encoding themselves never touch it.
 */

use std::sync::Mutex;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::all;
use crate::types::{Codec, CodecRef};

/// The codec name table: canonical names, aliases, and a memoized
/// label resolution map.
pub struct Registry {
    codecs: Vec<CodecRef>,
    resolved: Mutex<FxHashMap<String, CodecRef>>,
}

impl Registry {
    fn new(codecs: Vec<CodecRef>) -> Registry {
        Registry { codecs, resolved: Mutex::new(FxHashMap::default()) }
    }

    /// Finds the codec registered under `label`, a canonical name or
    /// alias, ignoring case and surrounding whitespace.
    pub fn lookup(&self, label: &str) -> Option<CodecRef> {
        let key = label.trim().to_ascii_lowercase();
        let mut resolved = self.resolved.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(&codec) = resolved.get(&key) {
            return Some(codec);
        }
        let found = self
            .codecs
            .iter()
            .copied()
            .find(|c| c.name() == key || c.aliases().contains(&key.as_str()))?;
        log::debug!("resolved codec label {:?} to {}", label, found.name());
        resolved.insert(key, found);
        Some(found)
    }

    /// The aliases registered for a canonical name.
    pub fn aliases(&self, canonical: &str) -> Option<&'static [&'static str]> {
        self.codecs.iter().find(|c| c.name() == canonical).map(|c| c.aliases())
    }

    /// Every registered codec, in registration order.
    pub fn codecs(&self) -> &[CodecRef] {
        &self.codecs
    }
}

/// The process-wide registry of built-in codecs.
pub fn registry() -> &'static Registry {
    static REGISTRY: Lazy<Registry> = Lazy::new(|| Registry::new(all::codecs()));
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Decoder;

    #[test]
    fn test_lookup_canonical() {
        assert_eq!(registry().lookup("euc-jp").unwrap().name(), "euc-jp");
        assert_eq!(registry().lookup("iso-2022-cn").unwrap().name(), "iso-2022-cn");
    }

    #[test]
    fn test_lookup_alias_and_case() {
        assert_eq!(registry().lookup("csISO2022KR").unwrap().name(), "iso-2022-kr");
        assert_eq!(registry().lookup("SJIS").unwrap().name(), "shift_jis");
        assert_eq!(registry().lookup("Shift_JIS-2004").unwrap().name(), "x-sjis-0213");
        assert_eq!(registry().lookup("ISCII").unwrap().name(), "x-iscii91");
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert_eq!(registry().lookup(" euc-jp\t").unwrap().name(), "euc-jp");
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(registry().lookup("klingon").is_none());
        assert!(registry().lookup("").is_none());
    }

    #[test]
    fn test_lookup_is_stable() {
        let first = registry().lookup("eucjp").unwrap();
        let second = registry().lookup("EUCJP").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_aliases() {
        assert!(registry().aliases("shift_jis").unwrap().contains(&"sjis"));
        assert!(registry().aliases("sjis").is_none()); // canonical names only
    }

    #[test]
    fn test_every_name_and_alias_resolves_to_its_codec() {
        for &codec in registry().codecs() {
            assert_eq!(registry().lookup(codec.name()).unwrap().name(), codec.name());
            for alias in codec.aliases() {
                assert_eq!(registry().lookup(alias).unwrap().name(), codec.name());
            }
        }
    }

    #[test]
    fn test_aliases_are_disjoint() {
        let mut labels: Vec<&str> = Vec::new();
        for &codec in registry().codecs() {
            labels.push(codec.name());
            labels.extend(codec.aliases());
        }
        let total = labels.len();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), total);
    }

    #[test]
    fn test_looked_up_decoder_is_fresh() {
        // two lookups of the same name share the codec but never a decoder
        let codec = registry().lookup("x-iscii91").unwrap();
        let mut first = codec.decoder();
        let (_, _, out) = first.test_feed(&[0xA1]);
        assert_eq!(out, "");
        let mut second = registry().lookup("x-iscii91").unwrap().decoder();
        let (_, out) = second.test_finish();
        assert_eq!(out, "");
        let (_, out) = first.test_finish();
        assert_eq!(out, "\u{901}");
    }
}
