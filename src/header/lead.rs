use std::io::{Read, Seek};

use crate::cursor::ByteCursor;
use crate::error::Result;

pub const MAGIC_HEADER: [u8; 3] = [142, 173, 232];
pub const HEADER_LEAD_SIZE: u64 = 16;

/// The 16 bytes preamble shared by the signature and the metadata header.
#[derive(Debug, PartialEq, Clone)]
pub struct HeaderLead {
    pub magic: [u8; 3],
    pub version: u8,
    pub reserved: [u8; 4],
    pub nindex: u32,
    pub hsize: u32,
}

impl HeaderLead {
    pub fn read<R: Read + Seek>(fh: &mut ByteCursor<R>) -> Result<Self> {
        let mut head = [0_u8; 8];
        fh.read_into(&mut head)?;
        let [m0, m1, m2, version, r0, r1, r2, r3] = head;

        let nindex = fh.read_u32()?;
        let hsize = fh.read_u32()?;

        Ok(HeaderLead {
            magic: [m0, m1, m2],
            version,
            reserved: [r0, r1, r2, r3],
            nindex,
            hsize,
        })
    }

    pub fn has_magic(&self) -> bool {
        self.magic == MAGIC_HEADER
    }

    /// Size of the index table that follows the preamble.
    pub fn index_size(&self) -> u64 {
        u64::from(self.nindex) * 16
    }
}

impl Default for HeaderLead {
    fn default() -> Self {
        HeaderLead {
            magic: MAGIC_HEADER,
            version: 1,
            reserved: [0; 4],
            nindex: 0,
            hsize: 0,
        }
    }
}
