use log::{debug, info, trace, warn};
use thiserror::Error;

use crate::{
    bus::Bus,
    device::{Device, DeviceError},
    inst::{decode_inst, Opcode, Operand, Rule},
    layout::MEM_SIZE,
    regs::{Flags, Pair, Reg, Registers},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    /// A halt instruction executed. Terminal.
    Halted,
    /// `run_with` aborted on a fault. Terminal.
    Faulted,
}

/// What `run_with` does when a step reports an unimplemented opcode.
/// Device faults always abort.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FaultPolicy {
    #[default]
    Abort,
    /// Step over the instruction as if it were a no-op of its table size.
    Skip,
}

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("unimplemented opcode {opcode:#04x} at {pc:#06x}")]
    UnimplementedOpcode { opcode: u8, pc: u16 },
    #[error("device fault in instruction at {pc:#06x}: {source}")]
    Device {
        pc: u16,
        #[source]
        source: DeviceError,
    },
}
impl ExecutionError {
    pub fn pc(&self) -> u16 {
        match self {
            ExecutionError::UnimplementedOpcode { pc, .. } | ExecutionError::Device { pc, .. } => {
                *pc
            }
        }
    }

    pub fn is_input_exhausted(&self) -> bool {
        matches!(
            self,
            ExecutionError::Device {
                source: DeviceError::InputExhausted,
                ..
            }
        )
    }
}

/// An 8080 interpreter over a borrowed 64KiB memory image.
pub struct I8080<'m, D> {
    regs: Registers,
    cycles: u64,
    state: State,
    /// PC and opcode of the last unimplemented fetch, so `skip` never
    /// fetches the same instruction twice.
    fault: Option<(u16, u8)>,
    bus: Bus<'m, D>,
}
impl<'m, D: Device> I8080<'m, D> {
    pub fn new(mem: &'m mut [u8; MEM_SIZE], io: D) -> Self {
        Self {
            regs: Registers::new(),
            cycles: 0,
            state: State::Running,
            fault: None,
            bus: Bus::new(mem, io),
        }
    }

    /// Zeroes the register file and cycle count and resumes at 0x0000.
    /// Memory is left as is.
    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.cycles = 0;
        self.state = State::Running;
        self.fault = None;
        self.bus.reset();
        debug!("reset, starting execution at {:#06x}", self.regs.pc);
    }

    /// Executes one instruction.
    ///
    /// On error nothing but the opcode fetch (and any device byte already
    /// consumed) has taken effect: PC still points at the faulting opcode
    /// and the CPU stays `Running`, so the caller decides what happens next.
    /// Calling `step` on a halted or faulted CPU does nothing.
    pub fn step(&mut self) -> Result<State, ExecutionError> {
        if self.state != State::Running {
            return Ok(self.state);
        }

        let pc = self.regs.pc;
        let opcode = self.read_byte(pc, pc)?;
        let inst = decode_inst(opcode);

        if inst.rule == Rule::Unimplemented {
            self.fault = Some((pc, opcode));
            return Err(ExecutionError::UnimplementedOpcode { opcode, pc });
        }
        self.fault = None;

        let operand = self.fetch_operand(pc, inst)?;
        debug!("{pc:#06x}: {:<10} {:?}", inst.mnemonic, operand);

        let saved = self.regs;
        self.regs.pc = pc.wrapping_add(inst.size as u16);
        if let Err(e) = self.execute(pc, opcode, inst.rule, operand) {
            self.regs = saved;
            return Err(e);
        }

        self.cycles += inst.cycles as u64;
        if inst.rule == Rule::Hlt {
            self.state = State::Halted;
            info!("halted at {pc:#06x} after {} cycles", self.cycles);
        }
        trace!("{:?}", self.regs);

        Ok(self.state)
    }

    /// Steps over the instruction at PC without executing it, charging its
    /// table size and cycle cost. After a fault at PC the faulting opcode is
    /// reused; otherwise the opcode is fetched. Does nothing unless `Running`.
    pub fn skip(&mut self) -> Result<(), ExecutionError> {
        if self.state != State::Running {
            return Ok(());
        }

        let pc = self.regs.pc;
        let opcode = match self.fault {
            Some((fault_pc, opcode)) if fault_pc == pc => opcode,
            _ => self.read_byte(pc, pc)?,
        };
        self.skip_opcode(opcode);
        Ok(())
    }

    fn skip_opcode(&mut self, opcode: u8) {
        let pc = self.regs.pc;
        let inst = decode_inst(opcode);
        warn!("skipping {opcode:#04x} ({}) at {pc:#06x}", inst.mnemonic);
        self.regs.pc = pc.wrapping_add(inst.size as u16);
        self.cycles += inst.cycles as u64;
        self.fault = None;
    }

    pub fn run(&mut self) -> Result<(), ExecutionError> {
        self.run_with(FaultPolicy::Abort)
    }

    /// Runs until halted, applying `policy` to unimplemented opcodes.
    pub fn run_with(&mut self, policy: FaultPolicy) -> Result<(), ExecutionError> {
        while self.state == State::Running {
            self.step_with(policy)?;
        }
        Ok(())
    }

    /// Runs at most `max_steps` instructions and returns how many executed.
    /// Skipped instructions count as steps.
    pub fn run_for_steps(
        &mut self,
        max_steps: u64,
        policy: FaultPolicy,
    ) -> Result<u64, ExecutionError> {
        let mut steps = 0;
        while self.state == State::Running && steps < max_steps {
            self.step_with(policy)?;
            steps += 1;
        }
        Ok(steps)
    }

    fn step_with(&mut self, policy: FaultPolicy) -> Result<(), ExecutionError> {
        let result = match self.step() {
            Err(ExecutionError::UnimplementedOpcode { opcode, .. })
                if policy == FaultPolicy::Skip =>
            {
                self.skip_opcode(opcode);
                Ok(())
            }
            other => other.map(|_| ()),
        };
        if result.is_err() {
            self.state = State::Faulted;
        }
        result
    }

    fn fetch_operand(&mut self, pc: u16, inst: &Opcode) -> Result<Operand, ExecutionError> {
        Ok(match inst.size {
            2 => Operand::Byte(self.read_byte(pc.wrapping_add(1), pc)?),
            3 => Operand::Word(
                self.bus
                    .read_word(pc.wrapping_add(1))
                    .map_err(|source| ExecutionError::Device { pc, source })?,
            ),
            _ => Operand::None,
        })
    }

    fn execute(
        &mut self,
        pc: u16,
        opcode: u8,
        rule: Rule,
        operand: Operand,
    ) -> Result<(), ExecutionError> {
        match rule {
            Rule::Nop => {}
            Rule::Lxi(pair) => self.regs.set_pair(pair, operand.word()),
            Rule::Mvi(dst) => self.write_reg(dst, operand.byte(), pc)?,
            Rule::Lda => self.regs.a = self.read_byte(operand.word(), pc)?,
            Rule::Sta => self.write_byte(operand.word(), self.regs.a, pc)?,
            Rule::Mov(dst, src) => {
                let data = self.read_reg(src, pc)?;
                self.write_reg(dst, data, pc)?;
            }
            Rule::Hlt => {}
            Rule::Add(src) => {
                let data = self.read_reg(src, pc)?;
                self.add(data);
            }
            Rule::Adi => self.add(operand.byte()),
            Rule::Jmp => self.regs.pc = operand.word(),
            // `step` reports these before any operand is fetched.
            Rule::Unimplemented => return Err(ExecutionError::UnimplementedOpcode { opcode, pc }),
        }
        Ok(())
    }

    fn add(&mut self, operand: u8) {
        let a = self.regs.a;
        let result = a as u16 + operand as u16;

        self.regs.flags.carry = result > 0xFF;
        self.regs.flags.aux_carry = (a & 0x0F) + (operand & 0x0F) > 0x0F;
        self.regs.a = result as u8;
        self.regs.flags.set_szp(self.regs.a);
    }

    fn read_reg(&mut self, reg: Reg, pc: u16) -> Result<u8, ExecutionError> {
        match self.regs.get(reg) {
            Some(data) => Ok(data),
            None => self.read_byte(self.regs.hl(), pc),
        }
    }

    fn write_reg(&mut self, reg: Reg, data: u8, pc: u16) -> Result<(), ExecutionError> {
        match reg {
            Reg::M => self.write_byte(self.regs.hl(), data, pc),
            _ => {
                self.regs.set(reg, data);
                Ok(())
            }
        }
    }

    fn read_byte(&mut self, addr: u16, pc: u16) -> Result<u8, ExecutionError> {
        self.bus
            .read(addr)
            .map_err(|source| ExecutionError::Device { pc, source })
    }

    fn write_byte(&mut self, addr: u16, data: u8, pc: u16) -> Result<(), ExecutionError> {
        self.bus
            .write(addr, data)
            .map_err(|source| ExecutionError::Device { pc, source })
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn a(&self) -> u8 {
        self.regs.a
    }

    pub fn b(&self) -> u8 {
        self.regs.b
    }

    pub fn c(&self) -> u8 {
        self.regs.c
    }

    pub fn d(&self) -> u8 {
        self.regs.d
    }

    pub fn e(&self) -> u8 {
        self.regs.e
    }

    pub fn h(&self) -> u8 {
        self.regs.h()
    }

    pub fn l(&self) -> u8 {
        self.regs.l()
    }

    pub fn hl(&self) -> u16 {
        self.regs.hl()
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    pub fn flags(&self) -> Flags {
        self.regs.flags
    }

    pub fn pair(&self, pair: Pair) -> u16 {
        self.regs.pair(pair)
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn bus(&self) -> &Bus<'m, D> {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::NullIO;
    use proptest::prelude::*;

    fn add_b(a: u8, b: u8) -> Flags {
        let mut mem = Box::new([0u8; MEM_SIZE]);
        mem[0] = 0x80; // ADD B
        let mut cpu = I8080::new(&mut mem, NullIO);
        cpu.registers_mut().a = a;
        cpu.registers_mut().b = b;
        cpu.step().unwrap();
        assert_eq!(cpu.a(), a.wrapping_add(b));
        cpu.flags()
    }

    #[test]
    fn add_sets_aux_carry_and_parity() {
        let flags = add_b(0x0F, 0x01);
        assert!(flags.aux_carry);
        assert!(!flags.parity); // 0x10 has one bit set

        let flags = add_b(0x01, 0x02);
        assert!(!flags.aux_carry);
        assert!(flags.parity); // 0x03
    }

    proptest! {
        #[test]
        fn add_flags_follow_the_result(a in any::<u8>(), b in any::<u8>()) {
            let flags = add_b(a, b);
            let wide = a as u16 + b as u16;
            let result = wide as u8;
            prop_assert_eq!(flags.carry, wide > 0xFF);
            prop_assert_eq!(flags.zero, result == 0);
            prop_assert_eq!(flags.sign, result & 0x80 != 0);
            prop_assert_eq!(flags.parity, result.count_ones() % 2 == 0);
            prop_assert_eq!(flags.aux_carry, (a & 0xF) + (b & 0xF) > 0xF);
        }
    }
}
