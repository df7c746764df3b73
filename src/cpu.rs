//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the clocked fetch-decode-execute engine.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle debt**: cycles still owed by the instruction in flight
//! - **Cycle counter**: u64 monotonically increasing count of elapsed cycles
//! - **Interrupt lines**: pending RESET/NMI requests and the IRQ level
//!
//! ## Execution Model
//!
//! - `tick()`: advance one clock cycle. Real work happens only when the cycle
//!   debt is idle; the remaining cycles of the instruction are paid off by the
//!   following ticks.
//! - `step()`: pay off any debt, then run exactly one instruction (or one
//!   interrupt sequence) and charge all of its cycles at once.
//! - `run_for_cycles()`: tick a fixed number of times.
//!
//! Interrupts are sampled only at instruction boundaries, before the next
//! opcode fetch.

use crate::addressing::{resolve, Operand, Resolved};
use crate::instructions;
use crate::interrupts::{self, InterruptLines};
use crate::timing::CycleDebt;
use crate::{AddressingMode, CpuConfig, ExecutionError, MemoryBus, Slot, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub(crate) const STACK_BASE: u16 = 0x0100;

const FLAG_C: u8 = 0b0000_0001;
const FLAG_Z: u8 = 0b0000_0010;
const FLAG_I: u8 = 0b0000_0100;
const FLAG_D: u8 = 0b0000_1000;
const FLAG_B: u8 = 0b0001_0000;
const FLAG_U: u8 = 0b0010_0000;
const FLAG_V: u8 = 0b0100_0000;
const FLAG_N: u8 = 0b1000_0000;

/// Copyable view of the programmer-visible registers.
///
/// `p` is the packed status byte (NV-BDIZC), bit 5 always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    pub pc: u16,
    pub sp: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
}

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer, cycle debt and interrupt lines. It is generic over the memory
/// implementation via the `MemoryBus` trait, and is exclusively owned by the driver.
///
/// # Examples
///
/// ```
/// use cpu6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = CPU::new(memory, CpuConfig::nmos());
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert!(cpu.flag_i());
///
/// // LDA #imm takes two cycles: the first tick does the work
/// cpu.tick().unwrap();
/// assert_eq!(cpu.a(), 0x42);
/// assert!(!cpu.debt().is_idle());
/// cpu.tick().unwrap();
/// assert!(cpu.debt().is_idle());
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    pub(crate) flag_n: bool,
    pub(crate) flag_v: bool,
    pub(crate) flag_b: bool,
    pub(crate) flag_d: bool,
    pub(crate) flag_i: bool,
    pub(crate) flag_z: bool,
    pub(crate) flag_c: bool,

    /// Total CPU cycles elapsed
    pub(crate) cycles: u64,

    /// Cycles owed before the next fetch
    debt: CycleDebt,

    lines: InterruptLines,

    config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU in its post-reset state.
    ///
    /// Construction stands for a completed power-on reset: the reset
    /// sequence's register effects are applied and PC is loaded from the reset
    /// vector at 0xFFFC/0xFFFD, but no cycles are charged and no debt is owed.
    /// A later [`request_reset`](Self::request_reset) runs the timed sequence.
    ///
    /// After construction A = X = Y = 0, SP = 0xFF, I and Z are set and every
    /// other flag is clear.
    pub fn new(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            debt: CycleDebt::Idle,
            lines: InterruptLines::default(),
            config,
            memory,
        };
        interrupts::service(&mut cpu, interrupts::Interrupt::Reset);
        cpu
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// If the previous instruction still owes cycles this only pays one of
    /// them. Otherwise pending interrupts are sampled and either one is
    /// serviced or the next instruction is fetched and executed in full; the
    /// instruction's remaining cycles become debt for the following ticks.
    ///
    /// # Errors
    ///
    /// `ExecutionError::InvalidOpcode` when the fetched opcode is unassigned.
    /// No cycle is counted, PC is left on the offending opcode, and every
    /// further tick reports the same error until the driver intervenes.
    pub fn tick(&mut self) -> Result<(), ExecutionError> {
        if self.debt.pay() {
            self.cycles += 1;
            return Ok(());
        }

        let cost = self.instruction_boundary()?;
        self.cycles += 1;
        self.debt = CycleDebt::after(cost);
        Ok(())
    }

    /// Runs exactly one instruction or interrupt sequence.
    ///
    /// Any debt left by earlier ticks is paid first. The instruction's cost is
    /// then charged in full, leaving the debt idle. Returns the cycles charged
    /// for the instruction itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem, CpuConfig::nmos());
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        while self.debt.pay() {
            self.cycles += 1;
        }

        let cost = self.instruction_boundary()?;
        self.cycles += cost as u64;
        Ok(cost)
    }

    /// Ticks the CPU `cycle_budget` times.
    ///
    /// Stops early on the first error. Returns the number of cycles that
    /// elapsed, which equals the budget when no error occurred.
    ///
    /// This is useful for frame-locked execution models where the CPU must run
    /// for an exact number of cycles per frame (e.g., 29780 cycles for 60Hz NTSC).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        for _ in 0..cycle_budget {
            self.tick()?;
        }
        Ok(cycle_budget)
    }

    /// Executes one already-fetched opcode.
    ///
    /// PC must point at the byte after `opcode`. Operand bytes are fetched,
    /// the addressing mode is resolved and the instruction applied. Returns the
    /// realized cycle cost: base cycles, plus one for a read-class instruction
    /// whose indexed address crossed a page, plus branch penalties. The cycle
    /// counter and debt are left to the caller.
    ///
    /// # Errors
    ///
    /// `ExecutionError::InvalidOpcode` for unassigned opcodes. PC is rewound
    /// onto the opcode and nothing else changes.
    pub fn execute(&mut self, opcode: u8) -> Result<u8, ExecutionError> {
        let metadata = &OPCODE_TABLE[opcode as usize];

        let (Slot::Assigned(instruction), Slot::Assigned(mode)) =
            (metadata.instruction, metadata.addressing_mode)
        else {
            let address = self.pc.wrapping_sub(1);
            self.pc = address;
            log::debug!("invalid opcode ${:02X} at ${:04X}", opcode, address);
            return Err(ExecutionError::InvalidOpcode { opcode, address });
        };

        let resolved = self.fetch_operand(mode);

        let mut cycles = metadata.base_cycles;
        if resolved.page_crossed && instruction.is_read() {
            cycles += 1;
        }
        cycles += instructions::execute(self, instruction, resolved);

        Ok(cycles)
    }

    /// Samples interrupts, then services one or executes the next opcode.
    fn instruction_boundary(&mut self) -> Result<u8, ExecutionError> {
        let irq_line = self.lines.irq_level() || self.memory.irq_active();
        if let Some(interrupt) = self.lines.poll(irq_line, self.flag_i) {
            self.lines.acknowledge(interrupt);
            return Ok(interrupts::service(self, interrupt));
        }

        let address = self.pc;
        let opcode = self.fetch_byte();
        let cycles = self.execute(opcode)?;

        log::trace!(
            "${:04X}: {:02X} {} ({} cycles) A={:02X} X={:02X} Y={:02X} P={:02X} SP={:02X}",
            address,
            opcode,
            OPCODE_TABLE[opcode as usize].mnemonic,
            cycles,
            self.a,
            self.x,
            self.y,
            self.status(),
            self.sp
        );

        Ok(cycles)
    }

    /// Fetches the operand bytes for `mode` and resolves them.
    fn fetch_operand(&mut self, mode: AddressingMode) -> Resolved {
        let (lo, hi) = match mode.operand_bytes() {
            0 => (0, 0),
            1 => (self.fetch_byte(), 0),
            _ => {
                let lo = self.fetch_byte();
                (lo, self.fetch_byte())
            }
        };
        resolve(mode, lo, hi, self.pc, self.x, self.y, &self.memory)
    }

    // ========== Internal Helpers ==========

    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word; the high byte address wraps at $FFFF.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte first, so the word sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    /// Reads the value an operand refers to.
    ///
    /// `Implied` never reaches here from a documented opcode and reads as 0.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.memory.read(addr),
            Operand::Implied => 0,
        }
    }

    /// Writes through an operand. Writes to `Immediate`/`Implied` are dropped.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::Immediate(_) | Operand::Implied => {}
        }
    }

    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = crate::alu::is_zero(value);
        self.flag_n = crate::alu::is_negative(value);
    }

    pub(crate) fn decimal_arithmetic(&self) -> bool {
        self.flag_d && self.config.decimal_enabled()
    }

    // ========== Interrupt Lines ==========

    /// Requests a reset, serviced at the next instruction boundary.
    ///
    /// The sequence takes 6 cycles, pushes nothing, loads PC from 0xFFFC,
    /// sets I, clears D and reinitializes A, X, Y and SP.
    pub fn request_reset(&mut self) {
        self.lines.request_reset();
    }

    /// Drives the NMI input. A rising edge latches one NMI.
    pub fn set_nmi(&mut self, level: bool) {
        self.lines.set_nmi(level);
    }

    /// Pulses the NMI input high then low, latching exactly one NMI.
    pub fn trigger_nmi(&mut self) {
        self.lines.set_nmi(true);
        self.lines.set_nmi(false);
    }

    /// Drives the IRQ input. The request stays pending for as long as the
    /// level is high and is serviced whenever I is clear at a boundary.
    pub fn set_irq(&mut self, level: bool) {
        self.lines.set_irq(level);
    }

    /// Returns true if an NMI is latched and not yet serviced.
    pub fn nmi_pending(&self) -> bool {
        self.lines.nmi_latched()
    }

    /// Returns true if the combined IRQ line (driver level or bus devices) is high.
    pub fn irq_pending(&self) -> bool {
        self.lines.irq_level() || self.memory.irq_active()
    }

    /// Returns true if a reset has been requested and not yet serviced.
    pub fn reset_pending(&self) -> bool {
        self.lines.reset_requested()
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status = FLAG_U;

        if self.flag_n {
            status |= FLAG_N;
        }
        if self.flag_v {
            status |= FLAG_V;
        }
        if self.flag_b {
            status |= FLAG_B;
        }
        if self.flag_d {
            status |= FLAG_D;
        }
        if self.flag_i {
            status |= FLAG_I;
        }
        if self.flag_z {
            status |= FLAG_Z;
        }
        if self.flag_c {
            status |= FLAG_C;
        }

        status
    }

    /// Returns the total number of cycles elapsed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the cycle debt of the instruction in flight.
    pub fn debt(&self) -> CycleDebt {
        self.debt
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CpuConfig) {
        self.config = config;
    }

    /// Returns a snapshot of the programmer-visible registers.
    pub fn registers(&self) -> Registers {
        Registers {
            pc: self.pc,
            sp: self.sp,
            a: self.a,
            x: self.x,
            y: self.y,
            p: self.status(),
        }
    }

    /// Overwrites the programmer-visible registers from a snapshot.
    pub fn load_registers(&mut self, registers: &Registers) {
        self.pc = registers.pc;
        self.sp = registers.sp;
        self.a = registers.a;
        self.x = registers.x;
        self.y = registers.y;
        self.set_status(registers.p);
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Loads every flag from a packed status byte. Bit 5 is ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & FLAG_N != 0;
        self.flag_v = value & FLAG_V != 0;
        self.flag_b = value & FLAG_B != 0;
        self.flag_d = value & FLAG_D != 0;
        self.flag_i = value & FLAG_I != 0;
        self.flag_z = value & FLAG_Z != 0;
        self.flag_c = value & FLAG_C != 0;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    // ========== Memory Access ==========

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands the memory back to the driver.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        CPU::new(mem, CpuConfig::nmos())
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert!(cpu.debt().is_idle());

        assert!(cpu.flag_i());
        assert!(cpu.flag_z());
        assert!(!cpu.flag_d());
        assert!(!cpu.flag_n());
        assert!(!cpu.flag_v());
        assert!(!cpu.flag_b());
        assert!(!cpu.flag_c());
    }

    #[test]
    fn test_status_register_packing() {
        let mut cpu = setup_cpu();
        assert_eq!(cpu.status(), 0b0010_0110);

        cpu.set_status(0x00);
        assert_eq!(cpu.status(), FLAG_U);

        cpu.set_status(0xFF);
        assert_eq!(cpu.status(), 0xFF);
    }

    #[test]
    fn test_stack_wraps_within_page_one() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);
        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0xAB);

        assert_eq!(cpu.pull(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_pc_wraps_at_top_of_address_space() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0xFFFF, 0xA9); // LDA #
        cpu.memory_mut().write(0x0000, 0x7E);
        cpu.set_pc(0xFFFF);

        cpu.step().unwrap();
        assert_eq!(cpu.a(), 0x7E);
        assert_eq!(cpu.pc(), 0x0001);
    }

    #[test]
    fn test_invalid_opcode_rewinds_pc() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x02);

        assert_eq!(
            cpu.tick(),
            Err(ExecutionError::InvalidOpcode {
                opcode: 0x02,
                address: 0x8000
            })
        );
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.cycles(), 0);

        // The driver skips it and carries on
        cpu.memory_mut().write(0x8001, 0xEA);
        cpu.set_pc(0x8001);
        assert_eq!(cpu.step(), Ok(2));
    }

    #[test]
    fn test_registers_snapshot_round_trip() {
        let mut cpu = setup_cpu();
        let regs = Registers {
            pc: 0x1234,
            sp: 0x80,
            a: 0x01,
            x: 0x02,
            y: 0x03,
            p: 0b1110_0001,
        };
        cpu.load_registers(&regs);
        assert_eq!(cpu.registers(), regs);
    }
}
