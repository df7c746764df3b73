//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Each works on either the accumulator or a memory location, depending on
//! the addressing mode. The bit shifted out lands in C; Z and N follow the
//! result.

use crate::addressing::Operand;
use crate::alu::{self, ShiftResult};
use crate::{MemoryBus, CPU};

fn apply<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    op: impl FnOnce(u8, bool) -> ShiftResult,
) {
    let value = cpu.read_operand(operand);
    let result = op(value, cpu.flag_c);

    cpu.write_operand(operand, result.value);
    cpu.flag_c = result.carry;
    cpu.set_zn(result.value);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    apply(cpu, operand, |value, _| alu::shift_left(value));
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag, so N is always
/// cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    apply(cpu, operand, |value, _| alu::shift_right(value));
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    apply(cpu, operand, alu::rotate_left);
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    apply(cpu, operand, alu::rotate_right);
}
