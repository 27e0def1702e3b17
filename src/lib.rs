mod bus;
mod cpu;
mod device;
pub mod devices;
mod image;
mod inst;
pub mod layout;
mod regs;

pub use bus::Bus;
pub use cpu::{ExecutionError, FaultPolicy, State, I8080};
pub use device::{Device, DeviceError};
pub use image::{image_from_bytes, load_image, LoadError};
pub use inst::{
    cycles_of, decode_inst, mnemonic_of, rule_of, size_of, Opcode, Operand, Rule, OPCODES,
};
pub use layout::MEM_SIZE;
pub use regs::{Flags, Pair, Reg, Registers};
