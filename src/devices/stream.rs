use std::io::{ErrorKind, Read, Write};

use crate::device::{Device, DeviceError};

/// Byte-at-a-time bridge to a pair of host streams.
///
/// Nothing is buffered on either side: a read blocks until the reader yields
/// one byte, and every write is flushed before returning.
pub struct StreamIO<R, W> {
    input: R,
    output: W,
}
impl<R: Read, W: Write> StreamIO<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
impl<R: Read, W: Write> Device for StreamIO<R, W> {
    fn read(&mut self, _: u16) -> Result<u8, DeviceError> {
        let mut byte = [0u8; 1];
        match self.input.read_exact(&mut byte) {
            Ok(()) => Ok(byte[0]),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(DeviceError::InputExhausted),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, _: u16, data: u8) -> Result<(), DeviceError> {
        self.output.write_all(&[data])?;
        self.output.flush()?;
        Ok(())
    }
}

/// No input, output discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullIO;
impl Device for NullIO {
    fn read(&mut self, _: u16) -> Result<u8, DeviceError> {
        Err(DeviceError::InputExhausted)
    }

    fn write(&mut self, _: u16, _: u8) -> Result<(), DeviceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn reads_one_byte_at_a_time_then_exhausts() {
        let mut dev = StreamIO::new(&b"hi"[..], Vec::new());
        assert_eq!(dev.read(0).unwrap(), b'h');
        assert_eq!(dev.read(0).unwrap(), b'i');
        assert!(matches!(dev.read(0), Err(DeviceError::InputExhausted)));
    }

    #[test]
    fn writes_in_order() {
        let mut dev = StreamIO::new(io::empty(), Vec::new());
        dev.write(0, b'o').unwrap();
        dev.write(0, b'k').unwrap();
        let (_, out) = dev.into_inner();
        assert_eq!(out, b"ok");
    }

    #[test]
    fn null_io_has_no_input() {
        assert!(matches!(NullIO.read(0), Err(DeviceError::InputExhausted)));
        assert!(NullIO.write(0, 1).is_ok());
    }
}
