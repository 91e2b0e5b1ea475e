//! Payload compressors named by the metadata header and their decoders.

mod codec;
mod external;

use log::debug;
use strum_macros::Display;

use crate::error::{Error, Result};

/// Algorithm the payload is stored with.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Compressor {
    /// No compressor tag, the payload is a plain archive.
    Identity,
    Gzip,
    /// Both `xz` and the legacy `lzma` name.
    Xz,
    Zstd,
    Bzip2,
}

impl Compressor {
    /// Resolves the value of the payload compressor tag.
    pub fn lookup(name: Option<&str>) -> Result<Self> {
        match name {
            None => Ok(Compressor::Identity),
            Some("gzip") => Ok(Compressor::Gzip),
            Some("xz") | Some("lzma") => Ok(Compressor::Xz),
            Some("zstd") => Ok(Compressor::Zstd),
            Some("bzip2") => Ok(Compressor::Bzip2),
            Some(other) => Err(Error::UnsupportedCompressor(other.to_owned())),
        }
    }

    /// Program used when the codec is not built in.
    pub fn program(self) -> Option<&'static str> {
        match self {
            Compressor::Identity => None,
            Compressor::Gzip => Some("gunzip"),
            Compressor::Xz => Some("unxz"),
            Compressor::Zstd => Some("unzstd"),
            Compressor::Bzip2 => Some("bunzip2"),
        }
    }

    fn is_built_in(self) -> bool {
        match self {
            Compressor::Identity => true,
            Compressor::Gzip => cfg!(feature = "gzip"),
            Compressor::Xz => cfg!(feature = "xz"),
            Compressor::Zstd => cfg!(feature = "zstd"),
            Compressor::Bzip2 => cfg!(feature = "bzip2"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Backend {
    Identity,
    InProcess,
    External(&'static str),
}

/// A compressor bound to the way it will be decoded.
#[derive(Debug, Clone, Copy)]
pub struct Decompressor {
    compressor: Compressor,
    backend: Backend,
}

impl Decompressor {
    pub fn new(compressor: Compressor) -> Self {
        let backend = match (compressor, compressor.program()) {
            (Compressor::Identity, _) => Backend::Identity,
            (c, Some(program)) if !c.is_built_in() => Backend::External(program),
            _ => Backend::InProcess,
        };
        debug!("payload compressor {} decoded by {:?}", compressor, backend);
        Self {
            compressor,
            backend,
        }
    }

    pub fn with_backend(compressor: Compressor, backend: Backend) -> Self {
        Self {
            compressor,
            backend,
        }
    }

    pub fn compressor(&self) -> Compressor {
        self.compressor
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn decompress(&self, data: Vec<u8>) -> Result<Vec<u8>> {
        match self.backend {
            Backend::Identity => Ok(data),
            Backend::InProcess => codec::decompress(self.compressor, &data),
            Backend::External(program) => external::decompress(self.compressor, program, data),
        }
    }
}
