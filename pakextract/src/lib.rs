mod error;
mod ext;
mod extract;
mod header;
mod pak;
mod path;
mod record;

pub use {error::*, extract::*, header::*, pak::*, path::*, record::*};

/// Tag stored in the first four bytes of every archive
pub const MAGIC: [u8; 4] = *b"PACK";

/// Size in bytes of one directory table record
pub const RECORD_SIZE: u32 = 64;

/// Size in bytes of the fixed name field of a directory record
pub const NAME_SIZE: usize = 56;
