//! Fortune streams: the ordered values that drive bout variance.
//!
//! Normal values lie in `0..=13`. Two out-of-band sentinels mark
//! critical events: [`CRITICAL_SUCCESS`] and [`CRITICAL_FAIL`].
//! Values are consumed strictly in order and never replayed during a
//! resolution.

pub mod fortune;

pub use fortune::{FortuneConfig, generate_fortune};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Smallest normal fortune value.
pub const MIN_FORTUNE: i32 = 0;
/// Largest normal fortune value.
pub const MAX_FORTUNE: i32 = 13;
/// Sentinel value for a critical success.
pub const CRITICAL_SUCCESS: i32 = 20;
/// Sentinel value for a critical failure.
pub const CRITICAL_FAIL: i32 = -5;
/// Number of draws every resolution consumes.
pub const REQUIRED_DRAWS: usize = 5;

/// Classification of a drawn fortune value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentinel {
    /// An ordinary value.
    None,
    /// The critical success sentinel.
    CriticalSuccess,
    /// The critical failure sentinel.
    CriticalFail,
}

/// Classify a drawn value.
pub fn classify(value: i32) -> Sentinel {
    match value {
        CRITICAL_SUCCESS => Sentinel::CriticalSuccess,
        CRITICAL_FAIL => Sentinel::CriticalFail,
        _ => Sentinel::None,
    }
}

/// A sequential cursor over fortune values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntropyStream {
    values: Vec<i32>,
    cursor: usize,
}

impl EntropyStream {
    /// Create a stream, rejecting values outside the normal range that are
    /// not sentinels.
    pub fn new(values: Vec<i32>) -> EngineResult<Self> {
        if let Some(&bad) = values.iter().find(|&&v| !is_legal(v)) {
            return Err(EngineError::EntropyOutOfRange(bad));
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Draw the next value.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> EngineResult<i32> {
        let value = *self
            .values
            .get(self.cursor)
            .ok_or(EngineError::EntropyExhausted {
                needed: self.cursor + 1,
                available: self.values.len(),
            })?;
        self.cursor += 1;
        tracing::trace!(position = self.cursor, value, "fortune drawn");
        Ok(value)
    }

    /// Classify a drawn value.
    pub fn peek_sentinel(&self, value: i32) -> Sentinel {
        classify(value)
    }

    /// How many values have been drawn.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// How many values are left.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }

    /// Restart from the first value.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// The values drawn so far.
    pub fn consumed(&self) -> &[i32] {
        &self.values[..self.cursor]
    }

    /// All values in the stream.
    pub fn values(&self) -> &[i32] {
        &self.values
    }
}

fn is_legal(value: i32) -> bool {
    (MIN_FORTUNE..=MAX_FORTUNE).contains(&value) || classify(value) != Sentinel::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_in_order() {
        let mut stream = EntropyStream::new(vec![5, 10, 8, 12, 3]).unwrap();
        assert_eq!(stream.remaining(), 5);
        assert_eq!(stream.next().unwrap(), 5);
        assert_eq!(stream.next().unwrap(), 10);
        assert_eq!(stream.position(), 2);
        assert_eq!(stream.consumed(), &[5, 10]);
        assert_eq!(stream.remaining(), 3);
    }

    #[test]
    fn exhausted_stream_errors() {
        let mut stream = EntropyStream::new(vec![1]).unwrap();
        stream.next().unwrap();
        assert_eq!(
            stream.next(),
            Err(EngineError::EntropyExhausted {
                needed: 2,
                available: 1
            })
        );
        // A failed draw does not advance the cursor.
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn rewind_replays_identically() {
        let mut stream = EntropyStream::new(vec![3, 20, -5, 13]).unwrap();
        let first: Vec<i32> = (0..4).map(|_| stream.next().unwrap()).collect();
        stream.rewind();
        let second: Vec<i32> = (0..4).map(|_| stream.next().unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn sentinels_classified() {
        let stream = EntropyStream::new(vec![]).unwrap();
        assert_eq!(stream.peek_sentinel(20), Sentinel::CriticalSuccess);
        assert_eq!(stream.peek_sentinel(-5), Sentinel::CriticalFail);
        assert_eq!(stream.peek_sentinel(0), Sentinel::None);
        assert_eq!(stream.peek_sentinel(13), Sentinel::None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            EntropyStream::new(vec![1, 14]),
            Err(EngineError::EntropyOutOfRange(14))
        );
        assert_eq!(
            EntropyStream::new(vec![-1]),
            Err(EngineError::EntropyOutOfRange(-1))
        );
        assert!(EntropyStream::new(vec![0, 13, 20, -5]).is_ok());
    }
}
