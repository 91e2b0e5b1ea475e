#![allow(dead_code)]

pub const RPM_MAGIC: [u8; 4] = [0xed, 0xab, 0xee, 0xdb];
pub const HEADER_MAGIC: [u8; 3] = [0x8e, 0xad, 0xe8];
pub const PAYLOAD_COMPRESSOR: u32 = 1125;
pub const PAYLOAD_FLAGS: u32 = 1126;
pub const HEADER_IMMUTABLE: u32 = 63;

/// Builds synthetic packages laid out the way `rpm2cpio` expects them.
#[derive(Debug, Default, Clone)]
pub struct PackageBuilder {
    signature_entries: u32,
    signature_data: u32,
    entries: Vec<(u32, u32)>,
    data: Vec<u8>,
    payload: Vec<u8>,
}

impl PackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signature(mut self, entries: u32, data: u32) -> Self {
        self.signature_entries = entries;
        self.signature_data = data;
        self
    }

    /// Adds an index entry pointing at `value` appended to the data section.
    pub fn tag(mut self, tag: u32, value: &[u8]) -> Self {
        let offset = self.data.len() as u32;
        self.data.extend_from_slice(value);
        self.entries.push((tag, offset));
        self
    }

    /// Adds an index entry without data.
    pub fn entry(mut self, tag: u32) -> Self {
        self.entries.push((tag, 0));
        self
    }

    pub fn data(mut self, data: &[u8]) -> Self {
        self.data.extend_from_slice(data);
        self
    }

    pub fn payload(mut self, payload: &[u8]) -> Self {
        self.payload = payload.to_vec();
        self
    }

    pub fn header_offset(&self) -> u64 {
        96 + 16 + u64::from(self.signature_entries) * 16 + u64::from(self.signature_data) + 4
    }

    pub fn payload_offset(&self) -> u64 {
        self.header_offset() + 16 + self.entries.len() as u64 * 16 + self.data.len() as u64
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = RPM_MAGIC.to_vec();
        out.extend_from_slice(&[3, 0, 0, 0, 0, 1]);
        let mut name = [0_u8; 66];
        let label = b"hello-1.0-1";
        name[..label.len()].copy_from_slice(label);
        out.extend_from_slice(&name);
        out.extend_from_slice(&[0, 1, 0, 5]);
        out.extend_from_slice(&[0_u8; 16]);

        push_preamble(&mut out, self.signature_entries, self.signature_data);
        let signature_end = out.len()
            + self.signature_entries as usize * 16
            + self.signature_data as usize
            + 4;
        out.resize(signature_end, 0);
        assert_eq!(out.len() as u64, self.header_offset());

        push_preamble(&mut out, self.entries.len() as u32, self.data.len() as u32);
        for &(tag, offset) in &self.entries {
            for value in [tag, 6, offset, 1] {
                out.extend_from_slice(&value.to_be_bytes());
            }
        }
        out.extend_from_slice(&self.data);
        assert_eq!(out.len() as u64, self.payload_offset());

        out.extend_from_slice(&self.payload);
        out
    }
}

fn push_preamble(out: &mut Vec<u8>, nindex: u32, hsize: u32) {
    out.extend_from_slice(&HEADER_MAGIC);
    out.push(1);
    out.extend_from_slice(&[0_u8; 4]);
    out.extend_from_slice(&nindex.to_be_bytes());
    out.extend_from_slice(&hsize.to_be_bytes());
}

/// A package whose compressor tag is followed by one more entry, since the
/// last index entry is never scanned.
pub fn package(compressor: &str, payload: &[u8]) -> PackageBuilder {
    let mut value = compressor.as_bytes().to_vec();
    value.push(0);
    PackageBuilder::new()
        .tag(PAYLOAD_COMPRESSOR, &value)
        .tag(PAYLOAD_FLAGS, b"9\0")
        .payload(payload)
}

/// A package without compressor tag.
pub fn plain_package(payload: &[u8]) -> PackageBuilder {
    PackageBuilder::new().entry(HEADER_IMMUTABLE).payload(payload)
}
