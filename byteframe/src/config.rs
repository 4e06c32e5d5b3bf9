//! Splitter configuration

use crate::error::{ApiError, Result};

/// Default scratch-buffer size for reader-driven splitting (64 KiB)
pub const DEFAULT_READ_BUFFER_SIZE: usize = 64 * 1024;

/// Configuration for a [`Splitter`](crate::Splitter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    delimiter: Vec<u8>,
    include_delimiter: bool,
    read_buffer_size: usize,
}

impl Config {
    /// Create a configuration with the given delimiter and defaults for
    /// everything else (delimiter excluded from records, 64 KiB reads).
    ///
    /// The delimiter is validated when the splitter is constructed.
    pub fn new(delimiter: impl Into<Vec<u8>>) -> Self {
        Self {
            delimiter: delimiter.into(),
            include_delimiter: false,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The delimiter pattern bounding records
    pub fn delimiter(&self) -> &[u8] {
        &self.delimiter
    }

    /// Whether records keep their terminating delimiter
    pub fn include_delimiter(&self) -> bool {
        self.include_delimiter
    }

    /// Scratch-buffer size used when splitting from a reader
    pub fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    delimiter: Vec<u8>,
    include_delimiter: bool,
    read_buffer_size: Option<usize>,
}

impl ConfigBuilder {
    /// Set the delimiter pattern (required, at least one byte)
    pub fn delimiter(mut self, delimiter: impl Into<Vec<u8>>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Keep the terminating delimiter in emitted records
    pub fn include_delimiter(mut self, include: bool) -> Self {
        self.include_delimiter = include;
        self
    }

    /// Set the scratch-buffer size for reader-driven splitting
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = Some(size);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.delimiter.is_empty() {
            return Err(ApiError::Config {
                reason: "delimiter is required and must not be empty".to_string(),
            });
        }
        if self.read_buffer_size == Some(0) {
            return Err(ApiError::Config {
                reason: "read buffer size must be at least one byte".to_string(),
            });
        }

        Ok(Config {
            delimiter: self.delimiter,
            include_delimiter: self.include_delimiter,
            read_buffer_size: self.read_buffer_size.unwrap_or(DEFAULT_READ_BUFFER_SIZE),
        })
    }
}
