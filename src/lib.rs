//! Extracts the cpio archive stored in an rpm package.
//!
//! ```no_run
//! use std::fs::File;
//! use std::io;
//!
//! let file = File::open("hello-1.0-1.x86_64.rpm")?;
//! rpm2cpio::convert(file, &mut io::stdout().lock())?;
//! # Ok::<(), rpm2cpio::Error>(())
//! ```

pub mod compress;
pub mod cursor;
pub mod error;
pub mod header;
pub mod lead;
pub mod rpm;

pub use compress::{Backend, Compressor, Decompressor};
pub use cursor::ByteCursor;
pub use error::{Error, Result};
pub use lead::Lead;
pub use rpm::{RPMFile, convert, extract};
