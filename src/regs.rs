/// Register operand as encoded in the 3-bit fields of the opcode.
///
/// `M` is not a register: it names the memory cell addressed by `HL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    M,
    A,
}
impl Reg {
    pub const fn from_code(code: u8) -> Self {
        match code & 0b111 {
            0 => Reg::B,
            1 => Reg::C,
            2 => Reg::D,
            3 => Reg::E,
            4 => Reg::H,
            5 => Reg::L,
            6 => Reg::M,
            _ => Reg::A,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Reg::B => "B",
            Reg::C => "C",
            Reg::D => "D",
            Reg::E => "E",
            Reg::H => "H",
            Reg::L => "L",
            Reg::M => "M",
            Reg::A => "A",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    BC,
    DE,
    HL,
    SP,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub sign: bool,
    pub zero: bool,
    pub aux_carry: bool,
    pub parity: bool,
    pub carry: bool,
}
impl Flags {
    /// Recomputes sign, zero and parity from an 8-bit result.
    pub fn set_szp(&mut self, result: u8) {
        self.sign = (result & 0b10000000) > 0;
        self.zero = result == 0;
        self.parity = result.count_ones() % 2 == 0;
    }
}
impl From<Flags> for u8 {
    fn from(flags: Flags) -> u8 {
        (flags.sign as u8) << 7
            | (flags.zero as u8) << 6
            | (flags.aux_carry as u8) << 4
            | (flags.parity as u8) << 2
            | (1 << 1)
            | (flags.carry as u8)
    }
}
impl From<u8> for Flags {
    fn from(value: u8) -> Self {
        Self {
            sign: (value & 0b10000000) > 0,
            zero: (value & 0b1000000) > 0,
            aux_carry: (value & 0b10000) > 0,
            parity: (value & 0b100) > 0,
            carry: (value & 0b1) > 0,
        }
    }
}

/// The programmer-visible state of the processor.
///
/// `H` and `L` have no storage of their own: both live in the single `hl`
/// word, so the byte view and the word view can never disagree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    hl: u16,
    pub pc: u16,
    pub sp: u16,
    pub flags: Flags,
}
impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn h(&self) -> u8 {
        (self.hl >> 8) as u8
    }

    pub fn l(&self) -> u8 {
        (self.hl & 0xFF) as u8
    }

    pub fn hl(&self) -> u16 {
        self.hl
    }

    pub fn set_h(&mut self, data: u8) {
        self.hl = (self.hl & 0x00FF) | (data as u16) << 8;
    }

    pub fn set_l(&mut self, data: u8) {
        self.hl = (self.hl & 0xFF00) | data as u16;
    }

    pub fn set_hl(&mut self, data: u16) {
        self.hl = data;
    }

    /// Reads a register operand. `M` has no register backing and yields `None`.
    pub fn get(&self, reg: Reg) -> Option<u8> {
        Some(match reg {
            Reg::A => self.a,
            Reg::B => self.b,
            Reg::C => self.c,
            Reg::D => self.d,
            Reg::E => self.e,
            Reg::H => self.h(),
            Reg::L => self.l(),
            Reg::M => return None,
        })
    }

    /// Writes a register operand. Writing `M` is a no-op here; the
    /// interpreter routes it through the bus instead.
    pub fn set(&mut self, reg: Reg, data: u8) {
        match reg {
            Reg::A => self.a = data,
            Reg::B => self.b = data,
            Reg::C => self.c = data,
            Reg::D => self.d = data,
            Reg::E => self.e = data,
            Reg::H => self.set_h(data),
            Reg::L => self.set_l(data),
            Reg::M => {}
        }
    }

    pub fn pair(&self, pair: Pair) -> u16 {
        match pair {
            Pair::BC => (self.b as u16) << 8 | self.c as u16,
            Pair::DE => (self.d as u16) << 8 | self.e as u16,
            Pair::HL => self.hl,
            Pair::SP => self.sp,
        }
    }

    pub fn set_pair(&mut self, pair: Pair, data: u16) {
        let hi = (data >> 8) as u8;
        let lo = (data & 0xFF) as u8;
        match pair {
            Pair::BC => {
                self.b = hi;
                self.c = lo;
            }
            Pair::DE => {
                self.d = hi;
                self.e = lo;
            }
            Pair::HL => self.hl = data,
            Pair::SP => self.sp = data,
        }
    }
}
