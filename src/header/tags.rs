pub const RPMTAG_PAYLOADCOMPRESSOR: u32 = 1125;

/// Header tags; only the one selecting the payload decompressor is named.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Tag {
    PayloadCompressor,
    Other(u32),
}

impl From<u32> for Tag {
    fn from(tag: u32) -> Self {
        match tag {
            RPMTAG_PAYLOADCOMPRESSOR => Tag::PayloadCompressor,
            x => Tag::Other(x),
        }
    }
}

impl From<Tag> for u32 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::PayloadCompressor => RPMTAG_PAYLOADCOMPRESSOR,
            Tag::Other(x) => x,
        }
    }
}
