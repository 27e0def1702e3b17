//! LDA, STA, MOV, MVI and LXI.

use i8080::{devices::NullIO, Pair, I8080, MEM_SIZE};

fn memory(program: &[u8]) -> Box<[u8; MEM_SIZE]> {
    let mut mem = Box::new([0u8; MEM_SIZE]);
    mem[..program.len()].copy_from_slice(program);
    mem
}

#[test]
fn test_lda_sta_round_trip() {
    let mut mem = memory(&[
        0x3A, 0x34, 0x12, // LDA 1234h
        0x32, 0x00, 0x90, // STA 9000h
        0x76,
    ]);
    mem[0x1234] = 0x5A;
    let before = mem.clone();

    {
        let mut cpu = I8080::new(&mut mem, NullIO);
        cpu.run().unwrap();
        assert_eq!(cpu.a(), 0x5A);
        assert_eq!(cpu.cycles(), 13 + 13 + 7);
    }

    assert_eq!(mem[0x9000], 0x5A);
    let changed: Vec<usize> = (0..MEM_SIZE).filter(|&i| mem[i] != before[i]).collect();
    assert_eq!(changed, vec![0x9000]);
}

#[test]
fn test_lda_operand_is_little_endian() {
    let mut mem = memory(&[0x3A, 0x01, 0x80]);
    mem[0x8001] = 0x11;
    mem[0x0180] = 0x22;

    let mut cpu = I8080::new(&mut mem, NullIO);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.pc(), 3);
}

#[test]
fn test_lda_leaves_flags_alone() {
    let mut mem = memory(&[0x3A, 0x00, 0x80]);
    let mut cpu = I8080::new(&mut mem, NullIO);
    cpu.registers_mut().flags.carry = true;
    cpu.step().unwrap();
    assert!(cpu.flags().carry);
    assert!(!cpu.flags().zero);
}

#[test]
fn test_mov_b_a() {
    let mut mem = memory(&[0x47]);
    let mut cpu = I8080::new(&mut mem, NullIO);
    cpu.registers_mut().a = 0x42;
    cpu.step().unwrap();
    assert_eq!(cpu.b(), 0x42);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_mov_through_m_uses_hl() {
    let mut mem = memory(&[
        0x21, 0x00, 0x88, // LXI H,8800h
        0x3E, 0x99, // MVI A,99h
        0x77, // MOV M,A
        0x4E, // MOV C,M
        0x76,
    ]);

    {
        let mut cpu = I8080::new(&mut mem, NullIO);
        cpu.run().unwrap();
        assert_eq!(cpu.hl(), 0x8800);
        assert_eq!(cpu.h(), 0x88);
        assert_eq!(cpu.l(), 0x00);
        assert_eq!(cpu.c(), 0x99);
        assert_eq!(cpu.cycles(), 10 + 7 + 7 + 7 + 7);
    }
    assert_eq!(mem[0x8800], 0x99);
}

#[test]
fn test_mvi_h_and_l_compose_hl() {
    let mut mem = memory(&[0x26, 0x12, 0x2E, 0x34, 0x36, 0x77, 0x76]);

    {
        let mut cpu = I8080::new(&mut mem, NullIO);
        cpu.run().unwrap();
        assert_eq!(cpu.hl(), 0x1234);
        assert_eq!(cpu.cycles(), 7 + 7 + 10 + 7);
    }
    assert_eq!(mem[0x1234], 0x77);
}

#[test]
fn test_lxi_loads_pairs() {
    let mut mem = memory(&[
        0x01, 0x02, 0x01, // LXI B,0102h
        0x11, 0x04, 0x03, // LXI D,0304h
        0x31, 0xFF, 0xEF, // LXI SP,EFFFh
        0x76,
    ]);
    let mut cpu = I8080::new(&mut mem, NullIO);
    cpu.run().unwrap();
    assert_eq!(cpu.pair(Pair::BC), 0x0102);
    assert_eq!(cpu.b(), 0x01);
    assert_eq!(cpu.d(), 0x03);
    assert_eq!(cpu.e(), 0x04);
    assert_eq!(cpu.c(), 0x02);
    assert_eq!(cpu.pair(Pair::DE), 0x0304);
    assert_eq!(cpu.sp(), 0xEFFF);
}

#[test]
fn test_jmp_overrides_advanced_pc() {
    let mut mem = memory(&[0xC3, 0x10, 0x00]);
    mem[0x0010] = 0x76;
    let mut cpu = I8080::new(&mut mem, NullIO);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0010);
    cpu.run().unwrap();
    assert_eq!(cpu.pc(), 0x0011);
    assert_eq!(cpu.cycles(), 10 + 7);
}
