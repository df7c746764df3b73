//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//!
//! NOP has no effect beyond its cycles and is handled by the dispatcher.
//!
//! The return address JSR pushes is the address of its own last byte; RTS
//! adds one after pulling it. RTI pulls the exact address with no adjustment.

use crate::addressing::Operand;
use crate::interrupts::IRQ_VECTOR;
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already produced the target, including the indirect
/// page-wrap defect: JMP ($10FF) reads its high byte from $1000, not $1100.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        cpu.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC - 1 (the last byte of the JSR) high byte first, then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        let return_address = cpu.pc.wrapping_sub(1);
        cpu.push_word(return_address);
        cpu.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register, then the program counter.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.set_status(status);
    cpu.pc = cpu.pull_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Pushing the address of the BRK opcode + 2 (the byte after BRK is padding)
/// 2. Setting the B flag, then pushing the status register
/// 3. Setting the I (interrupt disable) flag
/// 4. Loading the PC from the IRQ vector at $FFFE/F
///
/// Cycle timing: 7 cycles (fixed)
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    // PC already points one past the opcode
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_word(return_address);

    cpu.flag_b = true;
    let status = cpu.status();
    cpu.push(status);

    cpu.flag_i = true;
    cpu.pc = cpu.read_word(IRQ_VECTOR);
}
