use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use crate::layout::MEM_SIZE;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot load image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("image is {size} bytes, address space holds {MEM_SIZE}")]
    TooLarge { size: u64 },
}

/// Loads a raw image verbatim at 0x0000. The rest of memory is zeroed.
pub fn load_image(path: impl AsRef<Path>) -> Result<Box<[u8; MEM_SIZE]>, LoadError> {
    let path = path.as_ref();
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();
    if size > MEM_SIZE as u64 {
        return Err(LoadError::TooLarge { size });
    }

    let mut bytes = Vec::with_capacity(size as usize);
    file.read_to_end(&mut bytes).map_err(io_err)?;
    debug!("loaded {} bytes from {}", bytes.len(), path.display());
    image_from_bytes(&bytes)
}

pub fn image_from_bytes(bytes: &[u8]) -> Result<Box<[u8; MEM_SIZE]>, LoadError> {
    if bytes.len() > MEM_SIZE {
        return Err(LoadError::TooLarge {
            size: bytes.len() as u64,
        });
    }

    let mut mem = Box::new([0u8; MEM_SIZE]);
    mem[..bytes.len()].copy_from_slice(bytes);
    Ok(mem)
}
