use log::trace;

use crate::{
    device::{Device, DeviceError},
    layout::{Region, INPUT_ADDR, MEM_SIZE, OUTPUT_ADDR},
};

/// Arbitrates every access between the borrowed memory image and the
/// device wired to `INPUT_ADDR`/`OUTPUT_ADDR`.
///
/// At those two addresses the device fully shadows the buffer: reads never
/// see the stored byte and writes never land in it.
pub struct Bus<'m, D> {
    mem: &'m mut [u8; MEM_SIZE],
    io: D,
}
impl<'m, D: Device> Bus<'m, D> {
    pub fn new(mem: &'m mut [u8; MEM_SIZE], io: D) -> Self {
        Self { mem, io }
    }

    pub fn reset(&mut self) {
        self.io.reset();
    }

    pub fn read(&mut self, addr: u16) -> Result<u8, DeviceError> {
        if addr == INPUT_ADDR {
            let data = self.io.read(addr)?;
            trace!("in  {addr:#06x} -> {data:#04x}");
            return Ok(data);
        }
        Ok(self.mem[addr as usize])
    }

    pub fn write(&mut self, addr: u16, data: u8) -> Result<(), DeviceError> {
        if addr == OUTPUT_ADDR {
            trace!("out {addr:#06x} <- {data:#04x}");
            return self.io.write(addr, data);
        }
        trace!("write {addr:#06x} ({:?}) <- {data:#04x}", Region::of(addr));
        self.mem[addr as usize] = data;
        Ok(())
    }

    /// Little-endian: the byte at `addr` is the low half.
    pub fn read_word(&mut self, addr: u16) -> Result<u16, DeviceError> {
        let lo = self.read(addr)? as u16;
        let hi = self.read(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }

    /// Reads the backing buffer directly, bypassing any device.
    pub fn peek(&self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    pub fn memory(&self) -> &[u8; MEM_SIZE] {
        &*self.mem
    }
}
