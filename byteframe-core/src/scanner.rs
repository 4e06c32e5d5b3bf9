//! Incremental delimiter matching over a chunked byte stream
//!
//! The scanner owns a retention buffer and a pre-compiled literal pattern.
//! Each incoming chunk is appended to the buffer and only the bytes that
//! have not been examined before are searched, so total scan work stays
//! linear in the stream length regardless of how the stream is chunked.

use bytes::{Bytes, BytesMut};
use memchr::memmem::Finder;

use crate::error::{Result, ScanError};

/// Stateful splitter that frames a chunked byte stream into records
/// bounded by a fixed delimiter pattern.
///
/// Chunks are pushed in with [`feed`](Self::feed); completed records come
/// out through the sink closure in left-to-right order as reference-counted
/// [`Bytes`] snapshots that stay valid independently of later buffer
/// growth or trimming. The unmatched tail is retained between calls, so a
/// delimiter straddling any number of chunk boundaries is still found.
/// Call [`flush`](Self::flush) once at end of stream to obtain the final
/// record.
///
/// If the delimiter never occurs, the retention buffer grows without
/// bound; bounding it is left to the caller.
#[derive(Debug)]
pub struct DelimiterScanner {
    /// Pre-compiled searcher owning the delimiter bytes
    finder: Finder<'static>,
    /// Whether emitted records keep their terminating delimiter
    include_delimiter: bool,
    /// Bytes received but not yet emitted as part of a completed record
    buffer: BytesMut,
    /// Buffer offset from which the next search must resume; everything
    /// before it is proven free of a match start
    scanned: usize,
}

impl DelimiterScanner {
    /// Create a scanner for the given delimiter.
    ///
    /// `include_delimiter` controls whether emitted records keep the
    /// delimiter bytes that terminated them. Fails with
    /// [`ScanError::EmptyDelimiter`] if the delimiter is zero-length.
    pub fn new(delimiter: impl AsRef<[u8]>, include_delimiter: bool) -> Result<Self> {
        let delimiter = delimiter.as_ref();
        if delimiter.is_empty() {
            return Err(ScanError::EmptyDelimiter);
        }
        Ok(Self {
            finder: Finder::new(delimiter).into_owned(),
            include_delimiter,
            buffer: BytesMut::new(),
            scanned: 0,
        })
    }

    /// The delimiter pattern this scanner matches
    pub fn delimiter(&self) -> &[u8] {
        self.finder.needle()
    }

    /// Whether emitted records include the terminating delimiter
    pub fn include_delimiter(&self) -> bool {
        self.include_delimiter
    }

    /// Number of bytes currently held in the retention buffer
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Process the next chunk of the stream, emitting each completed
    /// record through `emit` in order.
    ///
    /// An empty chunk is a no-op. Back-to-back delimiters produce empty
    /// records. The next record always begins immediately after the full
    /// delimiter, whatever the emission policy.
    pub fn feed(&mut self, chunk: &[u8], mut emit: impl FnMut(Bytes)) {
        if chunk.is_empty() {
            return;
        }
        self.buffer.extend_from_slice(chunk);

        let delimiter_len = self.finder.needle().len();
        while let Some(pos) = self.finder.find(&self.buffer[self.scanned..]) {
            let match_end = self.scanned + pos + delimiter_len;
            // O(1) view split; the frozen prefix shares the allocation but
            // can never be touched by later appends to the remainder.
            let mut record = self.buffer.split_to(match_end);
            if !self.include_delimiter {
                record.truncate(record.len() - delimiter_len);
            }
            emit(record.freeze());
            // The remaining buffer starts just past the consumed delimiter
            // and none of it has been searched yet.
            self.scanned = 0;
        }

        // No match start position up to here could still complete; only
        // the last delimiter_len - 1 bytes may begin a partial match.
        self.scanned = self.buffer.len().saturating_sub(delimiter_len - 1);
    }

    /// End the stream, returning the entire remaining buffer verbatim as
    /// the final record (possibly empty, never delimiter-trimmed).
    ///
    /// This resets the scanner to its initial state, so it may be reused
    /// for a fresh stream afterwards.
    pub fn flush(&mut self) -> Bytes {
        self.scanned = 0;
        self.buffer.split().freeze()
    }
}
