use super::ext::ReadExt;
use super::record::Record;
use super::{Entry, Header};
use std::io::{self, Read, Seek, Write};

/// Decoded directory of an archive. Payloads are read on demand from the
/// source the reader was built from.
#[derive(Debug)]
pub struct PakReader {
    header: Header,
    entries: Vec<Entry>,
}

impl PakReader {
    /// Read the header and directory table. `reader` is expected to be
    /// positioned at the start of the archive.
    pub fn new<R: Read + Seek>(reader: &mut R) -> Result<Self, super::Error> {
        let header = Header::read(reader)?;
        tracing::debug!(
            dir_offset = header.dir_offset,
            dir_length = header.dir_length,
            "read header"
        );

        // the directory is not checked against the archive length, a table
        // past the end shows up as a short read below, so nothing is sized from it
        reader.seek(io::SeekFrom::Start(header.dir_offset as u64))?;
        let mut entries = vec![];
        for _ in 0..header.entry_count() {
            entries.push(Record::read(reader)?.into_entry());
        }
        tracing::debug!("read {} directory records", entries.len());

        Ok(Self { header, entries })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Entries in directory table order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn files(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn get<R: Read + Seek>(
        &self,
        entry: &Entry,
        reader: &mut R,
    ) -> Result<Vec<u8>, super::Error> {
        read_payload(entry, reader)
    }

    pub fn read_file<R: Read + Seek, W: Write>(
        &self,
        entry: &Entry,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), super::Error> {
        writer.write_all(&read_payload(entry, reader)?)?;
        Ok(())
    }
}

/// Decode the directory table of the archive in `reader`
pub fn collect_entries<R: Read + Seek>(reader: &mut R) -> Result<Vec<Entry>, super::Error> {
    PakReader::new(reader).map(PakReader::into_entries)
}

/// Read the whole payload of `entry`. A payload that ends past the end of the
/// source is an error, never a partial result.
pub(crate) fn read_payload<R: Read + Seek>(
    entry: &Entry,
    reader: &mut R,
) -> Result<Vec<u8>, super::Error> {
    reader.seek(io::SeekFrom::Start(entry.offset as u64))?;
    reader.read_len(entry.length as usize)
}
