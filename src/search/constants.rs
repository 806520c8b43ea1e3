//! Search constants.

/// Score bound larger than any attainable node value.
///
/// `-INF` is `-i64::MAX`, so negating either bound never overflows.
pub const INF: i64 = i64::MAX;

// Generated values must stay well inside the sentinel window.
const _: () = assert!(crate::tree::VALUE_LIMIT < INF / 4);
