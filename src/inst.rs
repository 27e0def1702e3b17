use crate::regs::{Pair, Reg};

/// What an opcode does once decoded. Every table entry carries one, so
/// dispatch over this type is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Nop,
    Lxi(Pair),
    Mvi(Reg),
    Lda,
    Sta,
    /// `MOV dst,src`
    Mov(Reg, Reg),
    Hlt,
    Add(Reg),
    Adi,
    Jmp,
    Unimplemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Diagnostic name only; never consulted during execution.
    pub mnemonic: &'static str,
    /// Opcode byte plus operand bytes: 1, 2 or 3.
    pub size: u8,
    /// Base cycle cost. Conditional returns and calls list the not-taken cost.
    pub cycles: u8,
    pub rule: Rule,
}

/// Operand bytes following the opcode, as implied by the entry's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    Byte(u8),
    /// Little-endian on the wire: low byte first.
    Word(u16),
}
impl Operand {
    pub fn byte(self) -> u8 {
        match self {
            Operand::Byte(data) => data,
            Operand::Word(word) => word as u8,
            Operand::None => 0,
        }
    }

    pub fn word(self) -> u16 {
        match self {
            Operand::Word(word) => word,
            Operand::Byte(data) => data as u16,
            Operand::None => 0,
        }
    }
}

const fn op(mnemonic: &'static str, size: u8, cycles: u8, rule: Rule) -> Opcode {
    Opcode {
        mnemonic,
        size,
        cycles,
        rule,
    }
}

pub fn decode_inst(byte: u8) -> &'static Opcode {
    &OPCODES[byte as usize]
}

pub fn size_of(byte: u8) -> u8 {
    decode_inst(byte).size
}

pub fn mnemonic_of(byte: u8) -> &'static str {
    decode_inst(byte).mnemonic
}

pub fn cycles_of(byte: u8) -> u8 {
    decode_inst(byte).cycles
}

pub fn rule_of(byte: u8) -> Rule {
    decode_inst(byte).rule
}

/// Every byte value maps to an entry. Bytes the chip decodes as
/// undocumented aliases (other than the four NOPs) are listed as `???`.
pub static OPCODES: [Opcode; 256] = [
    /* 0x00 */ op("NOP", 1, 4, Rule::Nop),
    /* 0x01 */ op("LXI B,d16", 3, 10, Rule::Lxi(Pair::BC)),
    /* 0x02 */ op("STAX B", 1, 7, Rule::Unimplemented),
    /* 0x03 */ op("INX B", 1, 5, Rule::Unimplemented),
    /* 0x04 */ op("INR B", 1, 5, Rule::Unimplemented),
    /* 0x05 */ op("DCR B", 1, 5, Rule::Unimplemented),
    /* 0x06 */ op("MVI B,d8", 2, 7, Rule::Mvi(Reg::B)),
    /* 0x07 */ op("RLC", 1, 4, Rule::Unimplemented),
    /* 0x08 */ op("???", 1, 0, Rule::Unimplemented),
    /* 0x09 */ op("DAD B", 1, 10, Rule::Unimplemented),
    /* 0x0A */ op("LDAX B", 1, 7, Rule::Unimplemented),
    /* 0x0B */ op("DCX B", 1, 5, Rule::Unimplemented),
    /* 0x0C */ op("INR C", 1, 5, Rule::Unimplemented),
    /* 0x0D */ op("DCR C", 1, 5, Rule::Unimplemented),
    /* 0x0E */ op("MVI C,d8", 2, 7, Rule::Mvi(Reg::C)),
    /* 0x0F */ op("RRC", 1, 4, Rule::Unimplemented),
    /* 0x10 */ op("NOP", 1, 4, Rule::Nop),
    /* 0x11 */ op("LXI D,d16", 3, 10, Rule::Lxi(Pair::DE)),
    /* 0x12 */ op("STAX D", 1, 7, Rule::Unimplemented),
    /* 0x13 */ op("INX D", 1, 5, Rule::Unimplemented),
    /* 0x14 */ op("INR D", 1, 5, Rule::Unimplemented),
    /* 0x15 */ op("DCR D", 1, 5, Rule::Unimplemented),
    /* 0x16 */ op("MVI D,d8", 2, 7, Rule::Mvi(Reg::D)),
    /* 0x17 */ op("RAL", 1, 4, Rule::Unimplemented),
    /* 0x18 */ op("???", 1, 0, Rule::Unimplemented),
    /* 0x19 */ op("DAD D", 1, 10, Rule::Unimplemented),
    /* 0x1A */ op("LDAX D", 1, 7, Rule::Unimplemented),
    /* 0x1B */ op("DCX D", 1, 5, Rule::Unimplemented),
    /* 0x1C */ op("INR E", 1, 5, Rule::Unimplemented),
    /* 0x1D */ op("DCR E", 1, 5, Rule::Unimplemented),
    /* 0x1E */ op("MVI E,d8", 2, 7, Rule::Mvi(Reg::E)),
    /* 0x1F */ op("RAR", 1, 4, Rule::Unimplemented),
    /* 0x20 */ op("NOP", 1, 4, Rule::Nop),
    /* 0x21 */ op("LXI H,d16", 3, 10, Rule::Lxi(Pair::HL)),
    /* 0x22 */ op("SHLD a16", 3, 16, Rule::Unimplemented),
    /* 0x23 */ op("INX H", 1, 5, Rule::Unimplemented),
    /* 0x24 */ op("INR H", 1, 5, Rule::Unimplemented),
    /* 0x25 */ op("DCR H", 1, 5, Rule::Unimplemented),
    /* 0x26 */ op("MVI H,d8", 2, 7, Rule::Mvi(Reg::H)),
    /* 0x27 */ op("DAA", 1, 4, Rule::Unimplemented),
    /* 0x28 */ op("???", 1, 0, Rule::Unimplemented),
    /* 0x29 */ op("DAD H", 1, 10, Rule::Unimplemented),
    /* 0x2A */ op("LHLD a16", 3, 16, Rule::Unimplemented),
    /* 0x2B */ op("DCX H", 1, 5, Rule::Unimplemented),
    /* 0x2C */ op("INR L", 1, 5, Rule::Unimplemented),
    /* 0x2D */ op("DCR L", 1, 5, Rule::Unimplemented),
    /* 0x2E */ op("MVI L,d8", 2, 7, Rule::Mvi(Reg::L)),
    /* 0x2F */ op("CMA", 1, 4, Rule::Unimplemented),
    /* 0x30 */ op("NOP", 1, 4, Rule::Nop),
    /* 0x31 */ op("LXI SP,d16", 3, 10, Rule::Lxi(Pair::SP)),
    /* 0x32 */ op("STA a16", 3, 13, Rule::Sta),
    /* 0x33 */ op("INX SP", 1, 5, Rule::Unimplemented),
    /* 0x34 */ op("INR M", 1, 10, Rule::Unimplemented),
    /* 0x35 */ op("DCR M", 1, 10, Rule::Unimplemented),
    /* 0x36 */ op("MVI M,d8", 2, 10, Rule::Mvi(Reg::M)),
    /* 0x37 */ op("STC", 1, 4, Rule::Unimplemented),
    /* 0x38 */ op("???", 1, 0, Rule::Unimplemented),
    /* 0x39 */ op("DAD SP", 1, 10, Rule::Unimplemented),
    /* 0x3A */ op("LDA a16", 3, 13, Rule::Lda),
    /* 0x3B */ op("DCX SP", 1, 5, Rule::Unimplemented),
    /* 0x3C */ op("INR A", 1, 5, Rule::Unimplemented),
    /* 0x3D */ op("DCR A", 1, 5, Rule::Unimplemented),
    /* 0x3E */ op("MVI A,d8", 2, 7, Rule::Mvi(Reg::A)),
    /* 0x3F */ op("CMC", 1, 4, Rule::Unimplemented),
    /* 0x40 */ op("MOV B,B", 1, 5, Rule::Mov(Reg::B, Reg::B)),
    /* 0x41 */ op("MOV B,C", 1, 5, Rule::Mov(Reg::B, Reg::C)),
    /* 0x42 */ op("MOV B,D", 1, 5, Rule::Mov(Reg::B, Reg::D)),
    /* 0x43 */ op("MOV B,E", 1, 5, Rule::Mov(Reg::B, Reg::E)),
    /* 0x44 */ op("MOV B,H", 1, 5, Rule::Mov(Reg::B, Reg::H)),
    /* 0x45 */ op("MOV B,L", 1, 5, Rule::Mov(Reg::B, Reg::L)),
    /* 0x46 */ op("MOV B,M", 1, 7, Rule::Mov(Reg::B, Reg::M)),
    /* 0x47 */ op("MOV B,A", 1, 5, Rule::Mov(Reg::B, Reg::A)),
    /* 0x48 */ op("MOV C,B", 1, 5, Rule::Mov(Reg::C, Reg::B)),
    /* 0x49 */ op("MOV C,C", 1, 5, Rule::Mov(Reg::C, Reg::C)),
    /* 0x4A */ op("MOV C,D", 1, 5, Rule::Mov(Reg::C, Reg::D)),
    /* 0x4B */ op("MOV C,E", 1, 5, Rule::Mov(Reg::C, Reg::E)),
    /* 0x4C */ op("MOV C,H", 1, 5, Rule::Mov(Reg::C, Reg::H)),
    /* 0x4D */ op("MOV C,L", 1, 5, Rule::Mov(Reg::C, Reg::L)),
    /* 0x4E */ op("MOV C,M", 1, 7, Rule::Mov(Reg::C, Reg::M)),
    /* 0x4F */ op("MOV C,A", 1, 5, Rule::Mov(Reg::C, Reg::A)),
    /* 0x50 */ op("MOV D,B", 1, 5, Rule::Mov(Reg::D, Reg::B)),
    /* 0x51 */ op("MOV D,C", 1, 5, Rule::Mov(Reg::D, Reg::C)),
    /* 0x52 */ op("MOV D,D", 1, 5, Rule::Mov(Reg::D, Reg::D)),
    /* 0x53 */ op("MOV D,E", 1, 5, Rule::Mov(Reg::D, Reg::E)),
    /* 0x54 */ op("MOV D,H", 1, 5, Rule::Mov(Reg::D, Reg::H)),
    /* 0x55 */ op("MOV D,L", 1, 5, Rule::Mov(Reg::D, Reg::L)),
    /* 0x56 */ op("MOV D,M", 1, 7, Rule::Mov(Reg::D, Reg::M)),
    /* 0x57 */ op("MOV D,A", 1, 5, Rule::Mov(Reg::D, Reg::A)),
    /* 0x58 */ op("MOV E,B", 1, 5, Rule::Mov(Reg::E, Reg::B)),
    /* 0x59 */ op("MOV E,C", 1, 5, Rule::Mov(Reg::E, Reg::C)),
    /* 0x5A */ op("MOV E,D", 1, 5, Rule::Mov(Reg::E, Reg::D)),
    /* 0x5B */ op("MOV E,E", 1, 5, Rule::Mov(Reg::E, Reg::E)),
    /* 0x5C */ op("MOV E,H", 1, 5, Rule::Mov(Reg::E, Reg::H)),
    /* 0x5D */ op("MOV E,L", 1, 5, Rule::Mov(Reg::E, Reg::L)),
    /* 0x5E */ op("MOV E,M", 1, 7, Rule::Mov(Reg::E, Reg::M)),
    /* 0x5F */ op("MOV E,A", 1, 5, Rule::Mov(Reg::E, Reg::A)),
    /* 0x60 */ op("MOV H,B", 1, 5, Rule::Mov(Reg::H, Reg::B)),
    /* 0x61 */ op("MOV H,C", 1, 5, Rule::Mov(Reg::H, Reg::C)),
    /* 0x62 */ op("MOV H,D", 1, 5, Rule::Mov(Reg::H, Reg::D)),
    /* 0x63 */ op("MOV H,E", 1, 5, Rule::Mov(Reg::H, Reg::E)),
    /* 0x64 */ op("MOV H,H", 1, 5, Rule::Mov(Reg::H, Reg::H)),
    /* 0x65 */ op("MOV H,L", 1, 5, Rule::Mov(Reg::H, Reg::L)),
    /* 0x66 */ op("MOV H,M", 1, 7, Rule::Mov(Reg::H, Reg::M)),
    /* 0x67 */ op("MOV H,A", 1, 5, Rule::Mov(Reg::H, Reg::A)),
    /* 0x68 */ op("MOV L,B", 1, 5, Rule::Mov(Reg::L, Reg::B)),
    /* 0x69 */ op("MOV L,C", 1, 5, Rule::Mov(Reg::L, Reg::C)),
    /* 0x6A */ op("MOV L,D", 1, 5, Rule::Mov(Reg::L, Reg::D)),
    /* 0x6B */ op("MOV L,E", 1, 5, Rule::Mov(Reg::L, Reg::E)),
    /* 0x6C */ op("MOV L,H", 1, 5, Rule::Mov(Reg::L, Reg::H)),
    /* 0x6D */ op("MOV L,L", 1, 5, Rule::Mov(Reg::L, Reg::L)),
    /* 0x6E */ op("MOV L,M", 1, 7, Rule::Mov(Reg::L, Reg::M)),
    /* 0x6F */ op("MOV L,A", 1, 5, Rule::Mov(Reg::L, Reg::A)),
    /* 0x70 */ op("MOV M,B", 1, 7, Rule::Mov(Reg::M, Reg::B)),
    /* 0x71 */ op("MOV M,C", 1, 7, Rule::Mov(Reg::M, Reg::C)),
    /* 0x72 */ op("MOV M,D", 1, 7, Rule::Mov(Reg::M, Reg::D)),
    /* 0x73 */ op("MOV M,E", 1, 7, Rule::Mov(Reg::M, Reg::E)),
    /* 0x74 */ op("MOV M,H", 1, 7, Rule::Mov(Reg::M, Reg::H)),
    /* 0x75 */ op("MOV M,L", 1, 7, Rule::Mov(Reg::M, Reg::L)),
    /* 0x76 */ op("HLT", 1, 7, Rule::Hlt),
    /* 0x77 */ op("MOV M,A", 1, 7, Rule::Mov(Reg::M, Reg::A)),
    /* 0x78 */ op("MOV A,B", 1, 5, Rule::Mov(Reg::A, Reg::B)),
    /* 0x79 */ op("MOV A,C", 1, 5, Rule::Mov(Reg::A, Reg::C)),
    /* 0x7A */ op("MOV A,D", 1, 5, Rule::Mov(Reg::A, Reg::D)),
    /* 0x7B */ op("MOV A,E", 1, 5, Rule::Mov(Reg::A, Reg::E)),
    /* 0x7C */ op("MOV A,H", 1, 5, Rule::Mov(Reg::A, Reg::H)),
    /* 0x7D */ op("MOV A,L", 1, 5, Rule::Mov(Reg::A, Reg::L)),
    /* 0x7E */ op("MOV A,M", 1, 7, Rule::Mov(Reg::A, Reg::M)),
    /* 0x7F */ op("MOV A,A", 1, 5, Rule::Mov(Reg::A, Reg::A)),
    /* 0x80 */ op("ADD B", 1, 4, Rule::Add(Reg::B)),
    /* 0x81 */ op("ADD C", 1, 4, Rule::Add(Reg::C)),
    /* 0x82 */ op("ADD D", 1, 4, Rule::Add(Reg::D)),
    /* 0x83 */ op("ADD E", 1, 4, Rule::Add(Reg::E)),
    /* 0x84 */ op("ADD H", 1, 4, Rule::Add(Reg::H)),
    /* 0x85 */ op("ADD L", 1, 4, Rule::Add(Reg::L)),
    /* 0x86 */ op("ADD M", 1, 7, Rule::Add(Reg::M)),
    /* 0x87 */ op("ADD A", 1, 4, Rule::Add(Reg::A)),
    /* 0x88 */ op("ADC B", 1, 4, Rule::Unimplemented),
    /* 0x89 */ op("ADC C", 1, 4, Rule::Unimplemented),
    /* 0x8A */ op("ADC D", 1, 4, Rule::Unimplemented),
    /* 0x8B */ op("ADC E", 1, 4, Rule::Unimplemented),
    /* 0x8C */ op("ADC H", 1, 4, Rule::Unimplemented),
    /* 0x8D */ op("ADC L", 1, 4, Rule::Unimplemented),
    /* 0x8E */ op("ADC M", 1, 7, Rule::Unimplemented),
    /* 0x8F */ op("ADC A", 1, 4, Rule::Unimplemented),
    /* 0x90 */ op("SUB B", 1, 4, Rule::Unimplemented),
    /* 0x91 */ op("SUB C", 1, 4, Rule::Unimplemented),
    /* 0x92 */ op("SUB D", 1, 4, Rule::Unimplemented),
    /* 0x93 */ op("SUB E", 1, 4, Rule::Unimplemented),
    /* 0x94 */ op("SUB H", 1, 4, Rule::Unimplemented),
    /* 0x95 */ op("SUB L", 1, 4, Rule::Unimplemented),
    /* 0x96 */ op("SUB M", 1, 7, Rule::Unimplemented),
    /* 0x97 */ op("SUB A", 1, 4, Rule::Unimplemented),
    /* 0x98 */ op("SBB B", 1, 4, Rule::Unimplemented),
    /* 0x99 */ op("SBB C", 1, 4, Rule::Unimplemented),
    /* 0x9A */ op("SBB D", 1, 4, Rule::Unimplemented),
    /* 0x9B */ op("SBB E", 1, 4, Rule::Unimplemented),
    /* 0x9C */ op("SBB H", 1, 4, Rule::Unimplemented),
    /* 0x9D */ op("SBB L", 1, 4, Rule::Unimplemented),
    /* 0x9E */ op("SBB M", 1, 7, Rule::Unimplemented),
    /* 0x9F */ op("SBB A", 1, 4, Rule::Unimplemented),
    /* 0xA0 */ op("ANA B", 1, 4, Rule::Unimplemented),
    /* 0xA1 */ op("ANA C", 1, 4, Rule::Unimplemented),
    /* 0xA2 */ op("ANA D", 1, 4, Rule::Unimplemented),
    /* 0xA3 */ op("ANA E", 1, 4, Rule::Unimplemented),
    /* 0xA4 */ op("ANA H", 1, 4, Rule::Unimplemented),
    /* 0xA5 */ op("ANA L", 1, 4, Rule::Unimplemented),
    /* 0xA6 */ op("ANA M", 1, 7, Rule::Unimplemented),
    /* 0xA7 */ op("ANA A", 1, 4, Rule::Unimplemented),
    /* 0xA8 */ op("XRA B", 1, 4, Rule::Unimplemented),
    /* 0xA9 */ op("XRA C", 1, 4, Rule::Unimplemented),
    /* 0xAA */ op("XRA D", 1, 4, Rule::Unimplemented),
    /* 0xAB */ op("XRA E", 1, 4, Rule::Unimplemented),
    /* 0xAC */ op("XRA H", 1, 4, Rule::Unimplemented),
    /* 0xAD */ op("XRA L", 1, 4, Rule::Unimplemented),
    /* 0xAE */ op("XRA M", 1, 7, Rule::Unimplemented),
    /* 0xAF */ op("XRA A", 1, 4, Rule::Unimplemented),
    /* 0xB0 */ op("ORA B", 1, 4, Rule::Unimplemented),
    /* 0xB1 */ op("ORA C", 1, 4, Rule::Unimplemented),
    /* 0xB2 */ op("ORA D", 1, 4, Rule::Unimplemented),
    /* 0xB3 */ op("ORA E", 1, 4, Rule::Unimplemented),
    /* 0xB4 */ op("ORA H", 1, 4, Rule::Unimplemented),
    /* 0xB5 */ op("ORA L", 1, 4, Rule::Unimplemented),
    /* 0xB6 */ op("ORA M", 1, 7, Rule::Unimplemented),
    /* 0xB7 */ op("ORA A", 1, 4, Rule::Unimplemented),
    /* 0xB8 */ op("CMP B", 1, 4, Rule::Unimplemented),
    /* 0xB9 */ op("CMP C", 1, 4, Rule::Unimplemented),
    /* 0xBA */ op("CMP D", 1, 4, Rule::Unimplemented),
    /* 0xBB */ op("CMP E", 1, 4, Rule::Unimplemented),
    /* 0xBC */ op("CMP H", 1, 4, Rule::Unimplemented),
    /* 0xBD */ op("CMP L", 1, 4, Rule::Unimplemented),
    /* 0xBE */ op("CMP M", 1, 7, Rule::Unimplemented),
    /* 0xBF */ op("CMP A", 1, 4, Rule::Unimplemented),
    /* 0xC0 */ op("RNZ", 1, 5, Rule::Unimplemented),
    /* 0xC1 */ op("POP B", 1, 10, Rule::Unimplemented),
    /* 0xC2 */ op("JNZ a16", 3, 10, Rule::Unimplemented),
    /* 0xC3 */ op("JMP a16", 3, 10, Rule::Jmp),
    /* 0xC4 */ op("CNZ a16", 3, 11, Rule::Unimplemented),
    /* 0xC5 */ op("PUSH B", 1, 11, Rule::Unimplemented),
    /* 0xC6 */ op("ADI d8", 2, 7, Rule::Adi),
    /* 0xC7 */ op("RST 0", 1, 11, Rule::Unimplemented),
    /* 0xC8 */ op("RZ", 1, 5, Rule::Unimplemented),
    /* 0xC9 */ op("RET", 1, 10, Rule::Unimplemented),
    /* 0xCA */ op("JZ a16", 3, 10, Rule::Unimplemented),
    /* 0xCB */ op("???", 1, 0, Rule::Unimplemented),
    /* 0xCC */ op("CZ a16", 3, 11, Rule::Unimplemented),
    /* 0xCD */ op("CALL a16", 3, 17, Rule::Unimplemented),
    /* 0xCE */ op("ACI d8", 2, 7, Rule::Unimplemented),
    /* 0xCF */ op("RST 1", 1, 11, Rule::Unimplemented),
    /* 0xD0 */ op("RNC", 1, 5, Rule::Unimplemented),
    /* 0xD1 */ op("POP D", 1, 10, Rule::Unimplemented),
    /* 0xD2 */ op("JNC a16", 3, 10, Rule::Unimplemented),
    /* 0xD3 */ op("OUT d8", 2, 10, Rule::Unimplemented),
    /* 0xD4 */ op("CNC a16", 3, 11, Rule::Unimplemented),
    /* 0xD5 */ op("PUSH D", 1, 11, Rule::Unimplemented),
    /* 0xD6 */ op("SUI d8", 2, 7, Rule::Unimplemented),
    /* 0xD7 */ op("RST 2", 1, 11, Rule::Unimplemented),
    /* 0xD8 */ op("RC", 1, 5, Rule::Unimplemented),
    /* 0xD9 */ op("???", 1, 0, Rule::Unimplemented),
    /* 0xDA */ op("JC a16", 3, 10, Rule::Unimplemented),
    /* 0xDB */ op("IN d8", 2, 10, Rule::Unimplemented),
    /* 0xDC */ op("CC a16", 3, 11, Rule::Unimplemented),
    /* 0xDD */ op("???", 1, 0, Rule::Unimplemented),
    /* 0xDE */ op("SBI d8", 2, 7, Rule::Unimplemented),
    /* 0xDF */ op("RST 3", 1, 11, Rule::Unimplemented),
    /* 0xE0 */ op("RPO", 1, 5, Rule::Unimplemented),
    /* 0xE1 */ op("POP H", 1, 10, Rule::Unimplemented),
    /* 0xE2 */ op("JPO a16", 3, 10, Rule::Unimplemented),
    /* 0xE3 */ op("XTHL", 1, 18, Rule::Unimplemented),
    /* 0xE4 */ op("CPO a16", 3, 11, Rule::Unimplemented),
    /* 0xE5 */ op("PUSH H", 1, 11, Rule::Unimplemented),
    /* 0xE6 */ op("ANI d8", 2, 7, Rule::Unimplemented),
    /* 0xE7 */ op("RST 4", 1, 11, Rule::Unimplemented),
    /* 0xE8 */ op("RPE", 1, 5, Rule::Unimplemented),
    /* 0xE9 */ op("PCHL", 1, 5, Rule::Unimplemented),
    /* 0xEA */ op("JPE a16", 3, 10, Rule::Unimplemented),
    /* 0xEB */ op("XCHG", 1, 4, Rule::Unimplemented),
    /* 0xEC */ op("CPE a16", 3, 11, Rule::Unimplemented),
    /* 0xED */ op("???", 1, 0, Rule::Unimplemented),
    /* 0xEE */ op("XRI d8", 2, 7, Rule::Unimplemented),
    /* 0xEF */ op("RST 5", 1, 11, Rule::Unimplemented),
    /* 0xF0 */ op("RP", 1, 5, Rule::Unimplemented),
    /* 0xF1 */ op("POP PSW", 1, 10, Rule::Unimplemented),
    /* 0xF2 */ op("JP a16", 3, 10, Rule::Unimplemented),
    /* 0xF3 */ op("DI", 1, 4, Rule::Unimplemented),
    /* 0xF4 */ op("CP a16", 3, 11, Rule::Unimplemented),
    /* 0xF5 */ op("PUSH PSW", 1, 11, Rule::Unimplemented),
    /* 0xF6 */ op("ORI d8", 2, 7, Rule::Unimplemented),
    /* 0xF7 */ op("RST 6", 1, 11, Rule::Unimplemented),
    /* 0xF8 */ op("RM", 1, 5, Rule::Unimplemented),
    /* 0xF9 */ op("SPHL", 1, 5, Rule::Unimplemented),
    /* 0xFA */ op("JM a16", 3, 10, Rule::Unimplemented),
    /* 0xFB */ op("EI", 1, 4, Rule::Unimplemented),
    /* 0xFC */ op("CM a16", 3, 11, Rule::Unimplemented),
    /* 0xFD */ op("???", 1, 0, Rule::Unimplemented),
    /* 0xFE */ op("CPI d8", 2, 7, Rule::Unimplemented),
    /* 0xFF */ op("RST 7", 1, 11, Rule::Unimplemented),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_in_range() {
        for byte in 0..=u8::MAX {
            assert!((1..=3).contains(&size_of(byte)), "{byte:#04x}");
        }
    }

    #[test]
    fn mov_block_is_regular() {
        for byte in 0x40..=0x7Fu8 {
            if byte == 0x76 {
                continue;
            }
            let dst = Reg::from_code(byte >> 3);
            let src = Reg::from_code(byte);
            assert_eq!(rule_of(byte), Rule::Mov(dst, src));
            assert_eq!(
                mnemonic_of(byte),
                format!("MOV {},{}", dst.name(), src.name())
            );
        }
    }

    #[test]
    fn operand_views() {
        assert_eq!(Operand::Word(0x1234).byte(), 0x34);
        assert_eq!(Operand::Byte(0x12).word(), 0x0012);
        assert_eq!(Operand::None.word(), 0);
    }
}
