use std::process::ExitCode;

use clap::Parser;
use i8080::{devices::NullIO, image_from_bytes, I8080, MEM_SIZE};
use log::error;
use termion::{color, style};

const LHS: u16 = 0x0010;
const RHS: u16 = 0x0011;
const SUM: u16 = 0x0012;

#[rustfmt::skip]
const PROGRAM: [u8; 16] = [
    0x3A, 0x10, 0x00, // LDA 0010h
    0x47,             // MOV B,A
    0x3A, 0x11, 0x00, // LDA 0011h
    0x80,             // ADD B
    0x32, 0x12, 0x00, // STA 0012h
    0x76,             // HLT
    0x00, 0x00, 0x00, 0x00,
];

/// Adds two bytes on the 8080 and prints the sum.
#[derive(Parser, Debug)]
#[command(name = "i8080_sum")]
struct Args {
    num1: u8,
    num2: u8,

    /// Dump registers and the first 32 bytes of memory after every step
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut mem = match image_from_bytes(&PROGRAM) {
        Ok(mem) => mem,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    mem[LHS as usize] = args.num1;
    mem[RHS as usize] = args.num2;

    let mut cpu = I8080::new(&mut mem, NullIO);
    while !cpu.is_halted() {
        if let Err(e) = cpu.step() {
            error!("{e}");
            return ExitCode::FAILURE;
        }
        if args.trace {
            dump_registers(&cpu);
            dump_memory(cpu.bus().memory(), 0, 0x20);
        }
    }

    println!("{}", cpu.bus().peek(SUM));
    ExitCode::SUCCESS
}

fn dump_registers(cpu: &I8080<NullIO>) {
    let regs = cpu.registers();
    let flags = regs.flags;
    println!(
        "{}PC={:04x} A={:02x} B={:02x} C={:02x} D={:02x} E={:02x} H={:02x} L={:02x} \
         S={} Z={} AC={} P={} C={} cycles={}{}",
        color::Fg(color::Cyan),
        regs.pc,
        regs.a,
        regs.b,
        regs.c,
        regs.d,
        regs.e,
        regs.h(),
        regs.l(),
        flags.sign as u8,
        flags.zero as u8,
        flags.aux_carry as u8,
        flags.parity as u8,
        flags.carry as u8,
        cpu.cycles(),
        style::Reset,
    );
}

fn dump_memory(mem: &[u8; MEM_SIZE], start: usize, len: usize) {
    for (i, byte) in mem.iter().skip(start).take(len).enumerate() {
        if *byte == 0 {
            print!("{}{:02x}{} ", color::Fg(color::Black), byte, style::Reset);
        } else {
            print!(
                "{}{}{:02x}{} ",
                style::Bold,
                color::Fg(color::Blue),
                byte,
                style::Reset
            );
        }
        if i % 16 == 15 {
            println!();
        }
    }
    println!();
}
