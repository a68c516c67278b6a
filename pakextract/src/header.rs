use super::ext::ReadExt;
use byteorder::{ReadBytesExt, LE};

/// Fixed 12 byte header at the start of an archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 4],
    /// absolute offset of the directory table
    pub dir_offset: u32,
    /// length of the directory table in bytes
    pub dir_length: u32,
}

impl Header {
    pub fn read<R: std::io::Read>(reader: &mut R) -> Result<Self, super::Error> {
        let magic = reader.read_fixed::<4>()?;
        if magic != super::MAGIC {
            return Err(super::Error::Magic(magic));
        }
        Ok(Self {
            magic,
            dir_offset: reader.read_u32::<LE>()?,
            dir_length: reader.read_u32::<LE>()?,
        })
    }

    /// Number of records in the directory table. Trailing bytes that do not
    /// make up a whole record are ignored.
    pub fn entry_count(&self) -> u32 {
        self.dir_length / super::RECORD_SIZE
    }
}
