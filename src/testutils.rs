// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

//! Macros for testing.
//!
//! The same macros drive decoders (byte input, string output) and encoders
//! (string input, byte output); the coder's `test_norm_*` methods anchor
//! the literal types.

/// Feeds `$input` and asserts that everything but `$remaining` was
/// consumed and exactly `$output` was produced.
macro_rules! assert_feed_ok {
    ($coder:expr, $input:expr, $remaining:expr, $output:expr) => {{
        let input = $coder.test_norm_input(&$input);
        let remaining = $coder.test_norm_input(&$remaining);
        let expected = $coder.test_norm_output(&$output);
        let (res, consumed, out) = $coder.test_feed(input);
        let expected_consumed = $coder.test_len(input) - $coder.test_len(remaining);
        assert!(
            res == crate::types::CoderResult::Underflow,
            "feed should return Underflow, but instead returned {:?}",
            res
        );
        assert!(
            consumed == expected_consumed,
            "feed should consume {} unit(s), but instead consumed {}",
            expected_consumed,
            consumed
        );
        assert!(
            out == expected,
            "feed should produce {:?}, but instead produced {:?}",
            expected,
            out
        );
    }};
}

/// Feeds `$input` and asserts that the call stopped with `$err` (a
/// `CoderResult` value) positioned before `$remaining`, having produced
/// `$output`.
macro_rules! assert_feed_err {
    ($coder:expr, $err:expr, $input:expr, $remaining:expr, $output:expr) => {{
        let input = $coder.test_norm_input(&$input);
        let remaining = $coder.test_norm_input(&$remaining);
        let expected = $coder.test_norm_output(&$output);
        let (res, consumed, out) = $coder.test_feed(input);
        let expected_consumed = $coder.test_len(input) - $coder.test_len(remaining);
        assert!(
            res == $err,
            "feed should return {:?}, but instead returned {:?}",
            $err,
            res
        );
        assert!(
            consumed == expected_consumed,
            "feed should stop after {} unit(s), but instead stopped after {}",
            expected_consumed,
            consumed
        );
        assert!(
            out == expected,
            "feed should produce {:?}, but instead produced {:?}",
            expected,
            out
        );
    }};
}

/// Flushes the coder and asserts that exactly `$output` was drained.
macro_rules! assert_finish_ok {
    ($coder:expr, $output:expr) => {{
        let expected = $coder.test_norm_output(&$output);
        let (res, out) = $coder.test_finish();
        assert!(
            res == crate::types::CoderResult::Underflow,
            "flush should return Underflow, but instead returned {:?}",
            res
        );
        assert!(
            out == expected,
            "flush should produce {:?}, but instead produced {:?}",
            expected,
            out
        );
    }};
}
