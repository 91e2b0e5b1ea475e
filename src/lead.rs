use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use strum_macros::Display;
use std::fmt;
use std::io::{Read, Seek};

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};

pub const MAGIC: [u8; 4] = [237, 171, 238, 219];
pub const LEAD_SIZE: u64 = 96;

#[derive(Debug, PartialEq, FromPrimitive, Display, Clone, Copy)]
pub enum Type {
    Binary = 0,
    Source = 1,
}

/// The fixed 96 bytes preamble of an rpm file.
///
/// Only the magic is checked, the other fields are kept for diagnostics.
#[derive(Clone)]
pub struct Lead {
    pub magic: [u8; 4],
    pub major: u8,
    pub minor: u8,
    pub rpm_type: u16,
    pub archnum: u16,
    pub name: [u8; 66],
    pub osnum: u16,
    pub signature_type: u16,
    pub reserved: [u8; 16],
}

impl Lead {
    /// Checks the magic number without consuming more than four bytes.
    pub fn read_magic<R: Read + Seek>(fh: &mut ByteCursor<R>) -> Result<[u8; 4]> {
        let found = fh.read_at_most(MAGIC.len())?;
        if found != MAGIC {
            return Err(Error::not_rpm(&found));
        }
        Ok(MAGIC)
    }

    pub fn read<R: Read + Seek>(fh: &mut ByteCursor<R>) -> Result<Self> {
        Self::read_magic(fh)?;
        Self::read_after_magic(fh)
    }

    fn read_after_magic<R: Read + Seek>(fh: &mut ByteCursor<R>) -> Result<Self> {
        let mut head = [0_u8; 2];
        fh.read_into(&mut head)?;
        let [major, minor] = head;

        let rpm_type = fh.read_u16()?;
        let archnum = fh.read_u16()?;

        let mut name = [0_u8; 66];
        fh.read_into(&mut name)?;
        let osnum = fh.read_u16()?;
        let signature_type = fh.read_u16()?;

        let mut reserved = [0_u8; 16];
        fh.read_into(&mut reserved)?;

        Ok(Lead {
            magic: MAGIC,
            major,
            minor,
            rpm_type,
            archnum,
            name,
            osnum,
            signature_type,
            reserved,
        })
    }

    pub fn package_type(&self) -> Option<Type> {
        Type::from_u16(self.rpm_type)
    }
}

fn parse_string(bytes: &[u8]) -> String {
    let position = bytes.iter().position(|&x| x == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..position]).to_string()
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rpm_type = self
            .package_type()
            .map(|t| t.to_string())
            .unwrap_or_else(|| self.rpm_type.to_string());
        writeln!(f, "magic: {:?}", self.magic)?;
        writeln!(f, "version: {}.{}", self.major, self.minor)?;
        writeln!(f, "rpm_type: {}", rpm_type)?;
        writeln!(f, "archnum: {}", self.archnum)?;
        writeln!(f, "name: {}", parse_string(&self.name))?;
        writeln!(f, "osnum: {}", self.osnum)?;
        write!(f, "signature_type: {}", self.signature_type)
    }
}

impl fmt::Debug for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lead")
            .field("magic", &self.magic)
            .field("major", &self.major)
            .field("minor", &self.minor)
            .field("rpm_type", &self.rpm_type)
            .field("archnum", &self.archnum)
            .field("name", &parse_string(&self.name))
            .field("osnum", &self.osnum)
            .field("signature_type", &self.signature_type)
            .finish()
    }
}
