//! Core delimiter-scanning algorithm for byteframe
//!
//! This crate implements the incremental matcher that turns an
//! arbitrarily-chunked byte stream into delimiter-bounded records. It
//! deliberately knows nothing about transports, readers, or
//! configuration handling; those live in the higher-level `byteframe`
//! crate.
//!
//! ```
//! use byteframe_core::DelimiterScanner;
//!
//! let mut scanner = DelimiterScanner::new("\n", false)?;
//! let mut records = Vec::new();
//! scanner.feed(b"foo\nb", |record| records.push(record));
//! scanner.feed(b"ar\n", |record| records.push(record));
//! assert_eq!(records[0].as_ref(), b"foo");
//! assert_eq!(records[1].as_ref(), b"bar");
//! assert_eq!(scanner.flush().as_ref(), b"");
//! # Ok::<(), byteframe_core::ScanError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod scanner;

pub use error::{Result, ScanError};
pub use scanner::DelimiterScanner;

// Re-export for convenience: emitted records are plain `Bytes`.
pub use bytes::Bytes;
