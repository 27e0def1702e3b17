//! NOP and its documented aliases.

use i8080::{cycles_of, devices::NullIO, mnemonic_of, Flags, I8080, MEM_SIZE};

const NOPS: [u8; 4] = [0x00, 0x10, 0x20, 0x30];

#[test]
fn test_nop_aliases_advance_pc_by_one() {
    for opcode in NOPS {
        let mut mem = Box::new([0u8; MEM_SIZE]);
        mem[0x0100] = opcode;
        mem[0x0101] = 0xAA;
        let before = mem.clone();

        let mut cpu = I8080::new(&mut mem, NullIO);
        cpu.registers_mut().pc = 0x0100;
        let regs = *cpu.registers();

        cpu.step().unwrap();

        let mut expected = regs;
        expected.pc = 0x0101;
        assert_eq!(*cpu.registers(), expected, "opcode {opcode:#04x}");
        assert_eq!(cpu.cycles(), 4);
        assert_eq!(cpu.bus().memory()[..], before[..]);
    }
}

#[test]
fn test_nop_aliases_preserve_flags() {
    for opcode in NOPS {
        let mut mem = Box::new([0u8; MEM_SIZE]);
        mem[0] = opcode;
        let mut cpu = I8080::new(&mut mem, NullIO);
        cpu.registers_mut().flags = Flags::from(0xD7u8);
        let flags = cpu.flags();

        cpu.step().unwrap();
        assert_eq!(cpu.flags(), flags);
    }
}

#[test]
fn test_nop_table_entries() {
    for opcode in NOPS {
        assert_eq!(mnemonic_of(opcode), "NOP");
        assert_eq!(cycles_of(opcode), 4);
    }
}

#[test]
fn test_nop_run_accumulates_cycles() {
    let mut mem = Box::new([0u8; MEM_SIZE]);
    mem[..4].copy_from_slice(&NOPS);
    mem[4] = 0x76; // HLT

    let mut cpu = I8080::new(&mut mem, NullIO);
    cpu.run().unwrap();
    assert_eq!(cpu.pc(), 5);
    assert_eq!(cpu.cycles(), 4 * 4 + 7);
}
