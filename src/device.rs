use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("input stream exhausted")]
    InputExhausted,
    #[error("device i/o error: {0}")]
    Io(#[from] io::Error),
}

/// A memory-mapped device. The bus calls `read`/`write` in place of the
/// backing buffer for every address the device is wired to.
pub trait Device {
    fn reset(&mut self) {}

    fn read(&mut self, addr: u16) -> Result<u8, DeviceError>;

    fn write(&mut self, addr: u16, data: u8) -> Result<(), DeviceError>;
}
