//! Streaming byte-stream splitting on a fixed delimiter
//!
//! `byteframe` consumes an unbounded, arbitrarily-chunked sequence of
//! bytes (from a serial port, a socket, a file, anything) and re-emits it
//! as discrete records bounded by occurrences of a caller-supplied
//! delimiter pattern. Chunk boundaries carry no meaning: a delimiter
//! split across reads is found exactly as if the stream had arrived in
//! one piece, and total scan work stays linear in the stream length.
//!
//! Push chunks yourself:
//!
//! ```
//! use byteframe::Splitter;
//!
//! let mut splitter = Splitter::with_delimiter("\n")?;
//! let mut records = splitter.feed(b"foo\nb");
//! records.extend(splitter.feed(b"ar\nbaz"));
//! assert_eq!(records[0].as_ref(), b"foo");
//! assert_eq!(records[1].as_ref(), b"bar");
//! assert_eq!(splitter.finish().as_ref(), b"baz");
//! # Ok::<(), byteframe::ApiError>(())
//! ```
//!
//! Or pull records out of any [`Read`](std::io::Read) source:
//!
//! ```
//! use byteframe::{Config, Records};
//! use std::io::Cursor;
//!
//! let source = Cursor::new(b"alpha;beta;gamma".to_vec());
//! let records = Records::new(source, Config::new(";"))?
//!     .collect::<byteframe::Result<Vec<_>>>()?;
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[2].as_ref(), b"gamma");
//! # Ok::<(), byteframe::ApiError>(())
//! ```
//!
//! Records are reference-counted [`Bytes`] snapshots: they stay valid and
//! immutable no matter what the splitter buffers or trims afterwards.
//!
//! The splitter never bounds its retention buffer; if the delimiter never
//! occurs in the input, the buffer grows with the stream. Callers that
//! need a cap can watch [`SplitStats::max_buffered`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod reader;
pub mod stats;

pub use config::{Config, ConfigBuilder, DEFAULT_READ_BUFFER_SIZE};
pub use error::{ApiError, Result};
pub use reader::Records;
pub use stats::SplitStats;

// Re-export core types for convenience
pub use byteframe_core::{Bytes, DelimiterScanner, ScanError};

use std::io::Read;

/// Stateful stream splitter: the high-level face of
/// [`DelimiterScanner`] with validated configuration and running
/// statistics.
#[derive(Debug)]
pub struct Splitter {
    scanner: DelimiterScanner,
    config: Config,
    stats: SplitStats,
}

impl Splitter {
    /// Create a splitter from a configuration.
    ///
    /// Fails if the configured delimiter is empty.
    pub fn new(config: Config) -> Result<Self> {
        let scanner = DelimiterScanner::new(config.delimiter(), config.include_delimiter())?;
        Ok(Self {
            scanner,
            config,
            stats: SplitStats::default(),
        })
    }

    /// Create a splitter for a delimiter with default settings
    pub fn with_delimiter(delimiter: impl AsRef<[u8]>) -> Result<Self> {
        Self::new(Config::new(delimiter.as_ref()))
    }

    /// Process the next chunk, returning the records it completed
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Bytes> {
        let mut records = Vec::new();
        self.feed_into(chunk, |record| records.push(record));
        records
    }

    /// Process the next chunk, emitting completed records through `emit`.
    ///
    /// Avoids the per-chunk allocation of [`feed`](Self::feed) when the
    /// caller already has somewhere for records to go.
    pub fn feed_into(&mut self, chunk: &[u8], mut emit: impl FnMut(Bytes)) {
        self.stats.chunks_fed += 1;
        self.stats.bytes_fed += chunk.len() as u64;
        let stats = &mut self.stats;
        self.scanner.feed(chunk, |record| {
            stats.records_emitted += 1;
            emit(record);
        });
        self.stats.max_buffered = self.stats.max_buffered.max(self.scanner.buffered());
    }

    /// End the stream, returning the trailing record verbatim (possibly
    /// empty).
    ///
    /// The splitter is reset afterwards and may be reused for a new
    /// stream; the statistics keep accumulating across streams.
    pub fn finish(&mut self) -> Bytes {
        let tail = self.scanner.flush();
        self.stats.records_emitted += 1;
        log::debug!(
            "stream finished: {} records from {} bytes in {} chunks",
            self.stats.records_emitted,
            self.stats.bytes_fed,
            self.stats.chunks_fed,
        );
        tail
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> SplitStats {
        self.stats
    }

    /// The configuration this splitter was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of bytes currently retained awaiting a delimiter
    pub fn buffered(&self) -> usize {
        self.scanner.buffered()
    }

    /// Turn this splitter into a record iterator over `reader`
    pub fn into_records<R: Read>(self, reader: R) -> Records<R> {
        Records::with_splitter(reader, self)
    }
}

// Convenience functions

/// Split a complete byte sequence on a delimiter with default settings.
///
/// The returned list always ends with the trailing record, which is empty
/// when the input ends with the delimiter.
pub fn split(data: &[u8], delimiter: impl AsRef<[u8]>) -> Result<Vec<Bytes>> {
    let mut splitter = Splitter::with_delimiter(delimiter)?;
    let mut records = splitter.feed(data);
    records.push(splitter.finish());
    Ok(records)
}

/// Split everything a reader produces, collecting the records
pub fn split_reader<R: Read>(reader: R, config: Config) -> Result<Vec<Bytes>> {
    Records::new(reader, config)?.collect()
}
