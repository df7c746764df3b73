//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page, wrapping from 0x00 to 0xFF and back without leaving the page.

use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Writes A to 0x0100 | SP, then decrements SP. Flags affected: None.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.push(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has B (bit 4) and bit 5 set; the live B flag is
/// left alone.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.status() | 0b0011_0000;
    cpu.push(status);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Increments SP, then loads A from 0x0100 | SP. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.set_zn(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag is loaded from the pulled byte; bit 5 still reads as 1.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.set_status(status);
}
