//! Reader-driven record iteration

use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

use byteframe_core::Bytes;

use crate::config::Config;
use crate::error::Result;
use crate::stats::SplitStats;
use crate::Splitter;

/// Iterator over delimiter-bounded records pulled from an [`io::Read`]
/// source.
///
/// Fills a scratch buffer of the configured size from the reader, feeds
/// each read into the splitter, and yields records as they complete. At
/// end of input the flushed trailing record is yielded exactly once, so
/// the iterator always produces at least one item for a readable source.
/// Read errors surface as `Err` items; `Interrupted` reads are retried.
///
/// [`io::Read`]: std::io::Read
pub struct Records<R> {
    reader: R,
    splitter: Splitter,
    scratch: Vec<u8>,
    pending: VecDeque<Bytes>,
    finished: bool,
}

impl<R: Read> Records<R> {
    /// Create a record iterator from a reader and configuration
    pub fn new(reader: R, config: Config) -> Result<Self> {
        Ok(Self::with_splitter(reader, Splitter::new(config)?))
    }

    pub(crate) fn with_splitter(reader: R, splitter: Splitter) -> Self {
        let scratch = vec![0u8; splitter.config().read_buffer_size()];
        Self {
            reader,
            splitter,
            scratch,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> SplitStats {
        self.splitter.stats()
    }

    /// Consume the iterator, returning the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }
            if self.finished {
                return None;
            }
            match self.reader.read(&mut self.scratch) {
                Ok(0) => {
                    self.finished = true;
                    log::debug!(
                        "reader exhausted after {} bytes, flushing tail",
                        self.splitter.stats().bytes_fed
                    );
                    return Some(Ok(self.splitter.finish()));
                }
                Ok(n) => {
                    let (splitter, pending) = (&mut self.splitter, &mut self.pending);
                    splitter.feed_into(&self.scratch[..n], |record| pending.push_back(record));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
