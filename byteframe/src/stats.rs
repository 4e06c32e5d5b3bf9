//! Runtime statistics for a split session

/// Counters accumulated by a [`Splitter`](crate::Splitter) over its
/// lifetime.
///
/// `max_buffered` is the retention-buffer high-water mark; with a
/// delimiter that never arrives the buffer grows without bound, and this
/// counter is the hook for callers that want to watch for that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitStats {
    /// Chunks passed to `feed` (including empty ones)
    pub chunks_fed: u64,
    /// Total bytes passed to `feed`
    pub bytes_fed: u64,
    /// Records emitted, counting the final record from `finish`
    pub records_emitted: u64,
    /// Largest number of bytes retained between chunks
    pub max_buffered: usize,
}
