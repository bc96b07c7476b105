// This is a part of textcode.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! Traditional Chinese index tables for
//! [textcode](https://github.com/textcode/textcode).

/// CNS 11643-1992 planes 1 through 3, reachable from the `ESC $ ) G`,
/// `ESC $ * H` and `ESC $ + I` designations.
pub mod cns11643;
