use std::io::{self, Read};

pub trait ReadExt {
    fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], super::Error>;
    fn read_len(&mut self, len: usize) -> Result<Vec<u8>, super::Error>;
}

impl<R: Read> ReadExt for R {
    fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], super::Error> {
        let mut buf = [0; N];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read exactly `len` bytes. The buffer grows with what the source
    /// actually holds, `len` comes straight from the archive.
    fn read_len(&mut self, len: usize) -> Result<Vec<u8>, super::Error> {
        let mut buf = vec![];
        self.by_ref().take(len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {len} bytes, found {}", buf.len()),
            )
            .into());
        }
        Ok(buf)
    }
}
