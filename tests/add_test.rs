//! ADD and ADI flag behaviour.

use i8080::{devices::NullIO, Flags, I8080, MEM_SIZE};

fn add(opcode: &[u8], a: u8, b: u8) -> (u8, Flags) {
    let mut mem = Box::new([0u8; MEM_SIZE]);
    mem[..opcode.len()].copy_from_slice(opcode);
    let mut cpu = I8080::new(&mut mem, NullIO);
    cpu.registers_mut().a = a;
    cpu.registers_mut().b = b;
    cpu.step().unwrap();
    (cpu.a(), cpu.flags())
}

#[test]
fn test_add_b_wraps_to_zero() {
    let (a, flags) = add(&[0x80], 0xFF, 0x01);
    assert_eq!(a, 0x00);
    assert!(flags.carry);
    assert!(flags.zero);
    assert!(!flags.sign);
}

#[test]
fn test_add_b_plain() {
    let (a, flags) = add(&[0x80], 0x01, 0x01);
    assert_eq!(a, 0x02);
    assert!(!flags.carry);
    assert!(!flags.zero);
    assert!(!flags.sign);
}

#[test]
fn test_add_b_sets_sign() {
    let (a, flags) = add(&[0x80], 0x7F, 0x01);
    assert_eq!(a, 0x80);
    assert!(flags.sign);
    assert!(!flags.carry);
    assert!(!flags.zero);
}

#[test]
fn test_add_clears_stale_flags() {
    let mut mem = Box::new([0u8; MEM_SIZE]);
    mem[0] = 0x80;
    let mut cpu = I8080::new(&mut mem, NullIO);
    cpu.registers_mut().flags = Flags::from(0xFFu8);
    cpu.registers_mut().a = 0x01;
    cpu.registers_mut().b = 0x02;
    cpu.step().unwrap();
    let flags = cpu.flags();
    assert!(!flags.carry && !flags.zero && !flags.sign && !flags.aux_carry);
    assert!(flags.parity);
}

#[test]
fn test_add_a_doubles() {
    let (a, flags) = add(&[0x87], 0x81, 0x00);
    assert_eq!(a, 0x02);
    assert!(flags.carry);
}

#[test]
fn test_add_m_reads_through_hl() {
    let mut mem = Box::new([0u8; MEM_SIZE]);
    mem[0] = 0x86; // ADD M
    mem[0x8123] = 0x05;
    let mut cpu = I8080::new(&mut mem, NullIO);
    cpu.registers_mut().set_hl(0x8123);
    cpu.registers_mut().a = 0x03;
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x08);
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_adi_uses_immediate() {
    let (a, flags) = add(&[0xC6, 0x10], 0xF0, 0x00);
    assert_eq!(a, 0x00);
    assert!(flags.carry);
    assert!(flags.zero);
}
