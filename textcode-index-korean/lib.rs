// This is a part of textcode.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! Korean index tables for [textcode](https://github.com/textcode/textcode).

/// KS C 5601-1987 (KS X 1001), the primary Korean set reachable from the
/// `ESC $ ) C` designation.
pub mod ksc5601;
