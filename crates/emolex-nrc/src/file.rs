//! File access for the lexicon parsers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use memmap2::Mmap;

use crate::error::LexiconError;

/// Strategy for reading lexicon files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map the file (zero-copy).
    Mmap,
    /// Read the file into an owned buffer. This is the default: lexicon
    /// files are small and fully materialized either way.
    Owned,
}

pub(crate) enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// Open and fully acquire one file. The handle is scoped to this call; the
/// mapping (or buffer) owns everything the parsers touch afterwards.
pub(crate) fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer, LexiconError> {
    match mode {
        LoadMode::Mmap => {
            let file = File::open(path)?;
            let map = unsafe { Mmap::map(&file) }?;
            Ok(Buffer::Mmap(map))
        }
        LoadMode::Owned => {
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Ok(Buffer::Owned(buf))
        }
    }
}

pub(crate) fn strip_cr(line: &[u8]) -> &[u8] {
    if line.ends_with(b"\r") {
        &line[..line.len() - 1]
    } else {
        line
    }
}
