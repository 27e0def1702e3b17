use std::ops::RangeInclusive;

/// Size of the flat address space.
pub const MEM_SIZE: usize = u16::MAX as usize + 1;

pub const CODE: RangeInclusive<u16> = 0x0000..=0x7FFF;
pub const WORK: RangeInclusive<u16> = 0x8000..=0xEFFF;
pub const DEVICE: RangeInclusive<u16> = 0xF000..=0xFFFF;

/// Reading this address pulls the next byte from the input stream.
pub const INPUT_ADDR: u16 = 0xFF00;
/// Writing this address pushes a byte to the output stream.
pub const OUTPUT_ADDR: u16 = 0xFF01;

/// Advisory classification of an address. Nothing restricts access by
/// region; it exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Code,
    Work,
    Device,
}
impl Region {
    pub fn of(addr: u16) -> Self {
        if CODE.contains(&addr) {
            Region::Code
        } else if WORK.contains(&addr) {
            Region::Work
        } else {
            Region::Device
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_space() {
        assert_eq!(*CODE.start(), 0);
        assert_eq!(*CODE.end() + 1, *WORK.start());
        assert_eq!(*WORK.end() + 1, *DEVICE.start());
        assert_eq!(*DEVICE.end(), u16::MAX);
    }

    #[test]
    fn device_registers_live_in_device_region() {
        assert_eq!(Region::of(INPUT_ADDR), Region::Device);
        assert_eq!(Region::of(OUTPUT_ADDR), Region::Device);
        assert_eq!(Region::of(0x0010), Region::Code);
        assert_eq!(Region::of(0x8000), Region::Work);
    }
}
