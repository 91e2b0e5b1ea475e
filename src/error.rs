//! Errors returned while extracting the payload of an rpm package.

use std::io;
use std::str::Utf8Error;
use thiserror::Error;

use crate::compress::Compressor;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The first four bytes are not the rpm lead magic.
    #[error("the input is not a RPM package (magic: {found})")]
    NotAnRpm { found: String },

    /// The stream ended before a read or seek could be satisfied.
    #[error("truncated input: expected {expected} more bytes at offset {offset}")]
    Truncated { offset: u64, expected: u64 },

    /// A string value of the metadata header is not valid UTF-8.
    #[error("malformed value of tag {tag}: {source}")]
    MalformedTag {
        tag: u32,
        #[source]
        source: Utf8Error,
    },

    #[error("decompressor \"{0}\" is not supported")]
    UnsupportedCompressor(String),

    #[error("could not find {compressor} extractor, please install the `{program}` utility")]
    DecompressorUnavailable {
        compressor: Compressor,
        program: &'static str,
    },

    #[error("can not decompress {compressor} payload: {message}")]
    Decompression {
        compressor: Compressor,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn not_rpm(found: &[u8]) -> Self {
        Error::NotAnRpm {
            found: hex::encode(found),
        }
    }

    pub(crate) fn decompression<E: std::fmt::Display>(compressor: Compressor, err: E) -> Self {
        Error::Decompression {
            compressor,
            message: err.to_string(),
        }
    }
}
