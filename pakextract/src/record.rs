use super::ext::ReadExt;
use byteorder::{ReadBytesExt, LE};

/// One 64 byte directory table record as stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Record {
    pub name: [u8; super::NAME_SIZE],
    pub offset: u32,
    pub length: u32,
}

impl Record {
    pub fn read<R: std::io::Read>(reader: &mut R) -> Result<Self, super::Error> {
        Ok(Self {
            name: reader.read_fixed()?,
            offset: reader.read_u32::<LE>()?,
            length: reader.read_u32::<LE>()?,
        })
    }

    /// Name with the NUL padding removed from the end. Leading and interior
    /// NULs are kept as they are.
    pub fn name(&self) -> String {
        let end = self
            .name
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |last| last + 1);
        String::from_utf8_lossy(&self.name[..end]).into_owned()
    }

    pub fn into_entry(self) -> Entry {
        Entry {
            name: self.name(),
            offset: self.offset,
            length: self.length,
        }
    }
}

/// A file stored in the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// path of the file inside the archive, `/` separated
    pub name: String,
    /// absolute offset of the payload
    pub offset: u32,
    /// length of the payload in bytes
    pub length: u32,
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
