// This is a part of textcode.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! Simplified Chinese index tables for
//! [textcode](https://github.com/textcode/textcode).

/// GB 2312-80, the primary simplified Chinese set reachable from the
/// `ESC $ ) A` designation.
pub mod gb2312;
