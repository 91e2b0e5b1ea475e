mod file;

pub use file::*;

use std::io::{Read, Seek, Write};

use crate::error::Result;
use crate::header::{HEADER_LEAD_SIZE, HeaderLead};
use crate::lead::LEAD_SIZE;

/// Bytes between the end of the signature data and the metadata header.
///
/// Fixed by the layout of real packages, the signature is not re-aligned.
pub const SIGNATURE_PADDING: u64 = 4;

/// Absolute offset of the metadata header, derived from the signature lengths.
pub fn header_offset(signature: &HeaderLead) -> u64 {
    signature.index_size()
        + u64::from(signature.hsize)
        + LEAD_SIZE
        + HEADER_LEAD_SIZE
        + SIGNATURE_PADDING
}

/// Absolute offset of the payload given the start of the metadata data section.
pub fn payload_offset(data_base: u64, header: &HeaderLead) -> u64 {
    data_base + u64::from(header.hsize)
}

/// Reads an rpm package and returns its decompressed payload.
pub fn extract<R: Read + Seek>(input: R) -> Result<Vec<u8>> {
    RPMFile::read(input)?.into_cpio()
}

/// Writes the decompressed payload of `input` to `output`.
///
/// Nothing is written unless the whole payload was decoded.
pub fn convert<R: Read + Seek, W: Write>(input: R, output: &mut W) -> Result<u64> {
    let cpio = extract(input)?;
    output.write_all(&cpio)?;
    output.flush()?;
    Ok(cpio.len() as u64)
}
