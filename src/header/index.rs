use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::io::{Read, Seek};
use strum_macros::Display;

use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::header::Tag;

#[derive(Debug, PartialEq, FromPrimitive, Display, Clone, Copy)]
pub enum Type {
    Null = 0,
    Char = 1,
    Int8 = 2,
    Int16 = 3,
    Int32 = 4,
    Int64 = 5,
    String = 6,
    Bin = 7,
    StringArray = 8,
    I18nString = 9,
}

impl From<u32> for Type {
    fn from(itype: u32) -> Self {
        Type::from_u32(itype).unwrap_or(Type::Null)
    }
}

/// One entry of a header index table.
#[derive(Debug, PartialEq, Clone)]
pub struct Index {
    pub tag: Tag,
    pub itype: Type,
    pub offset: u32,
    pub count: u32,
}

impl Index {
    pub fn read<R: Read + Seek>(fh: &mut ByteCursor<R>) -> Result<Self> {
        let tag = fh.read_u32()?.into();
        let itype = fh.read_u32()?.into();
        let offset = fh.read_u32()?;
        let count = fh.read_u32()?;

        Ok(Index {
            tag,
            itype,
            offset,
            count,
        })
    }
}
