use log::{debug, warn};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use super::{header_offset, payload_offset};
use crate::compress::{Compressor, Decompressor};
use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::header::{HeaderLead, Index, Tag};
use crate::lead::Lead;

/// An rpm package read up to its payload.
#[derive(Debug)]
pub struct RPMFile {
    pub lead: Lead,
    pub signature: HeaderLead,
    pub header: HeaderLead,
    pub compressor: Option<String>,
    pub header_offset: u64,
    pub payload_offset: u64,
    pub payload: Vec<u8>,
}

impl RPMFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::read(file)
    }

    pub fn read<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut fh = ByteCursor::new(reader)?;

        let lead = Lead::read(&mut fh)?;
        debug!("lead:\n{}", lead);

        // only the lengths of the signature are needed to skip it
        let signature = HeaderLead::read(&mut fh)?;
        let header_offset = header_offset(&signature);
        debug!(
            "signature: {} entries, {} bytes of data, header at {}",
            signature.nindex, signature.hsize, header_offset
        );
        fh.seek(header_offset)?;

        let header = HeaderLead::read(&mut fh)?;
        if !header.has_magic() {
            warn!(
                "unexpected header magic {} at offset {}",
                hex::encode(header.magic),
                header_offset
            );
        }
        let data_base = fh.tell() + header.index_size();

        let mut compressor = None;
        // the last entry of the table is never inspected
        for _ in 0..header.nindex.saturating_sub(1) {
            let index = Index::read(&mut fh)?;
            if index.tag != Tag::PayloadCompressor {
                continue;
            }
            if compressor.is_some() {
                warn!("ignoring duplicate payload compressor tag");
                continue;
            }

            let position = fh.tell();
            fh.seek(data_base + u64::from(index.offset))?;
            let value = fh.read_cstring()?;
            fh.seek(position)?;

            let name = String::from_utf8(value).map_err(|e| Error::MalformedTag {
                tag: index.tag.into(),
                source: e.utf8_error(),
            })?;
            debug!("payload compressor: {}", name);
            compressor = Some(name);
        }

        let payload_offset = payload_offset(data_base, &header);
        fh.seek(payload_offset)?;
        let payload = fh.read_remaining()?;
        debug!("payload: {} bytes at {}", payload.len(), payload_offset);

        Ok(RPMFile {
            lead,
            signature,
            header,
            compressor,
            header_offset,
            payload_offset,
            payload,
        })
    }

    /// Decodes the payload with the decompressor named by the header.
    pub fn into_cpio(self) -> Result<Vec<u8>> {
        let compressor = Compressor::lookup(self.compressor.as_deref())?;
        let cpio = Decompressor::new(compressor).decompress(self.payload)?;
        debug!("{} payload decompressed to {} bytes", compressor, cpio.len());
        Ok(cpio)
    }
}
