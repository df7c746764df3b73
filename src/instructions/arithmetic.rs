//! # Arithmetic and Logic Instructions
//!
//! This module implements the accumulator-centred ALU operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND / ORA / EOR: Bitwise logic
//! - BIT: Bit test
//! - CMP / CPX / CPY: Compare register with memory
//!
//! Results and flags are computed by [`crate::alu`]; these functions only
//! read operands and write the outcome back into the CPU.

use crate::addressing::Operand;
use crate::alu;
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. With D set and
/// decimal mode enabled in the CPU configuration the sum is BCD-adjusted.
///
/// Flags affected: C, Z, V, N
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = alu::add_with_carry(cpu.a, value, cpu.flag_c, cpu.decimal_arithmetic());

    cpu.a = result.value;
    cpu.flag_c = result.carry;
    cpu.flag_v = result.overflow;
    cpu.flag_z = result.zero;
    cpu.flag_n = result.negative;
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. Carry clear afterwards means a borrow occurred.
///
/// Flags affected: C, Z, V, N
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = alu::subtract_with_carry(cpu.a, value, cpu.flag_c, cpu.decimal_arithmetic());

    cpu.a = result.value;
    cpu.flag_c = result.carry;
    cpu.flag_v = result.overflow;
    cpu.flag_z = result.zero;
    cpu.flag_n = result.negative;
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a & cpu.read_operand(operand);
    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a | cpu.read_operand(operand);
    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a ^ cpu.read_operand(operand);
    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from `A & M`; N and V are copied from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = alu::bit_test(cpu.a, value);

    cpu.flag_z = result.zero;
    cpu.flag_v = result.overflow;
    cpu.flag_n = result.negative;
}

/// Executes CMP, CPX or CPY against `register`.
///
/// Flags are set as if `register - M` were computed; nothing is stored.
///
/// Flags affected: C, Z, N
pub(crate) fn execute_compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = alu::compare(register, value);

    cpu.flag_c = result.carry;
    cpu.flag_z = result.zero;
    cpu.flag_n = result.negative;
}
