//! Buffered, encoding-aware line reading for ZRXP input streams
//!
//! The reader yields decoded text lines lazily without loading the whole
//! file into memory: fixed-size chunks are appended to an internal buffer
//! and the buffer is scanned for the encoded line delimiter. It knows
//! nothing about ZRXP semantics; classification happens downstream.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use encoding_rs::Encoding;
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::{Error, Result};

/// Lazy line reader over a byte stream
///
/// The reader exclusively owns the underlying file handle. It is released
/// exactly once, either by an explicit [`close`](StreamReader::close) or when
/// the reader is dropped; any read attempted after close panics.
#[derive(Debug)]
pub struct StreamReader {
    file: Option<File>,
    encoding: &'static Encoding,
    delimiter: Vec<u8>,
    chunk_size: usize,
    buffer: Vec<u8>,
    at_end: bool,
    skipped_lines: usize,
}

impl StreamReader {
    /// Open a file for line-by-line reading with the given configuration
    ///
    /// Fails when the file cannot be opened or the configured delimiter is
    /// not representable in the configured encoding.
    pub fn open(path: &Path, config: &ParserConfig) -> Result<Self> {
        config.validate()?;

        let file = File::open(path).map_err(|error| {
            Error::stream_init(path.display().to_string(), format!("cannot open file: {error}"))
        })?;

        let (delimiter, _, had_errors) = config.encoding.encode(&config.delimiter);
        if had_errors {
            return Err(Error::stream_init(
                path.display().to_string(),
                format!(
                    "delimiter {:?} is not representable in {}",
                    config.delimiter,
                    config.encoding.name()
                ),
            ));
        }

        debug!(
            "Opened {} (encoding={}, chunk_size={})",
            path.display(),
            config.encoding.name(),
            config.chunk_size
        );

        Ok(Self {
            file: Some(file),
            encoding: config.encoding,
            delimiter: delimiter.into_owned(),
            chunk_size: config.chunk_size,
            buffer: Vec::with_capacity(config.chunk_size),
            at_end: false,
            skipped_lines: 0,
        })
    }

    /// Return the next decoded line, or `None` once the stream is exhausted
    ///
    /// The delimiter is not part of the returned line. Residual bytes at end
    /// of input form one final, delimiter-less line. A line whose bytes do
    /// not decode is skipped and counted in
    /// [`skipped_lines`](StreamReader::skipped_lines).
    pub fn next_line(&mut self) -> Option<String> {
        assert!(self.file.is_some(), "stream reader used after close");

        loop {
            // Drain complete lines already sitting in the buffer.
            while let Some(position) = find_subslice(&self.buffer, &self.delimiter) {
                let consumed: Vec<u8> = self
                    .buffer
                    .drain(..position + self.delimiter.len())
                    .collect();

                match self.decode(&consumed[..position]) {
                    Some(line) => return Some(line),
                    None => self.skip_undecodable(&consumed[..position]),
                }
            }

            if self.at_end {
                if self.buffer.is_empty() {
                    return None;
                }

                // Buffer holds the last line in the file, not terminated by
                // the delimiter.
                let residual = std::mem::take(&mut self.buffer);
                match self.decode(&residual) {
                    Some(line) => return Some(line),
                    None => {
                        self.skip_undecodable(&residual);
                        return None;
                    }
                }
            }

            self.fill_buffer();
        }
    }

    /// Start reading from the beginning of the input again
    pub fn rewind(&mut self) -> Result<()> {
        let file = self.file.as_mut().expect("stream reader used after close");

        file.seek(SeekFrom::Start(0))
            .map_err(|error| Error::io("cannot seek to start of input", error))?;

        self.buffer.clear();
        self.at_end = false;
        self.skipped_lines = 0;

        Ok(())
    }

    /// Release the underlying file handle
    ///
    /// No reading must be done after calling this method; the handle is
    /// closed exactly once even if the reader is dropped afterwards.
    pub fn close(&mut self) {
        self.file = None;
    }

    /// Number of lines dropped because their bytes did not decode
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Append the next chunk to the buffer, or mark end of input
    fn fill_buffer(&mut self) {
        let file = self.file.as_mut().expect("stream reader used after close");

        let mut chunk = vec![0u8; self.chunk_size];
        match file.read(&mut chunk) {
            Ok(0) => self.at_end = true,
            Ok(read) => self.buffer.extend_from_slice(&chunk[..read]),
            Err(error) => {
                warn!("Read failed, treating as end of input: {}", error);
                self.at_end = true;
            }
        }
    }

    fn decode(&self, bytes: &[u8]) -> Option<String> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|line| line.into_owned())
    }

    fn skip_undecodable(&mut self, bytes: &[u8]) {
        self.skipped_lines += 1;
        warn!(
            "Skipping undecodable line ({} bytes, encoding={})",
            bytes.len(),
            self.encoding.name()
        );
    }
}

impl Iterator for StreamReader {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_line()
    }
}

/// Position of the first occurrence of `needle` in `haystack`
fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if haystack.len() < needle.len() {
        return None;
    }

    haystack.windows(needle.len()).position(|window| window == needle)
}
