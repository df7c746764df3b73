//! # ALU and Flag Engine
//!
//! Pure functions computing result values and status flag outcomes for the
//! arithmetic, logical, shift/rotate and compare operations. Nothing here
//! touches CPU state; the instruction implementations apply the returned
//! flags.
//!
//! ## Decimal Mode
//!
//! `add_with_carry` and `subtract_with_carry` take a `decimal` argument. When
//! true they follow NMOS 6502 binary-coded-decimal behaviour:
//!
//! - ADC: the stored value and carry are BCD-adjusted per nibble. Z comes from
//!   the plain binary sum, while N and V come from the intermediate result
//!   after the low nibble has been adjusted.
//! - SBC: every flag comes from the binary subtraction; only the stored value
//!   is BCD-adjusted.
//!
//! Whether the caller passes `decimal = true` is a CPU configuration choice.

/// Returns true if the value is zero (Z flag).
#[inline]
pub const fn is_zero(value: u8) -> bool {
    value == 0
}

/// Returns true if bit 7 is set (N flag).
#[inline]
pub const fn is_negative(value: u8) -> bool {
    value & 0x80 != 0
}

/// Outcome of ADC/SBC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithResult {
    pub value: u8,
    pub carry: bool,
    pub overflow: bool,
    pub zero: bool,
    pub negative: bool,
}

impl ArithResult {
    fn binary(a: u8, operand: u8, carry_in: bool) -> Self {
        let sum = a as u16 + operand as u16 + carry_in as u16;
        let value = sum as u8;

        // Signed overflow: both inputs share a sign the result does not
        let overflow = (a ^ value) & (operand ^ value) & 0x80 != 0;

        Self {
            value,
            carry: sum > 0xFF,
            overflow,
            zero: is_zero(value),
            negative: is_negative(value),
        }
    }
}

/// Outcome of CMP/CPX/CPY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareResult {
    pub carry: bool,
    pub zero: bool,
    pub negative: bool,
}

/// Outcome of ASL/LSR/ROL/ROR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftResult {
    pub value: u8,
    /// The bit shifted out, which becomes the new carry.
    pub carry: bool,
}

/// Outcome of BIT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitResult {
    pub zero: bool,
    pub overflow: bool,
    pub negative: bool,
}

/// ADC: `a + operand + carry_in`.
///
/// # Examples
///
/// ```
/// use cpu6502::alu::add_with_carry;
///
/// let r = add_with_carry(0x50, 0x50, false, false);
/// assert_eq!(r.value, 0xA0);
/// assert!(r.overflow);
///
/// // 58 + 46 + 1 = 105 in BCD
/// let r = add_with_carry(0x58, 0x46, true, true);
/// assert_eq!(r.value, 0x05);
/// assert!(r.carry);
/// ```
pub fn add_with_carry(a: u8, operand: u8, carry_in: bool, decimal: bool) -> ArithResult {
    let binary = ArithResult::binary(a, operand, carry_in);
    if !decimal {
        return binary;
    }

    let mut low = (a & 0x0F) as u16 + (operand & 0x0F) as u16 + carry_in as u16;
    if low >= 0x0A {
        low = ((low + 0x06) & 0x0F) + 0x10;
    }

    let mut sum = (a & 0xF0) as u16 + (operand & 0xF0) as u16 + low;
    let signed = (a & 0xF0) as i8 as i16 + (operand & 0xF0) as i8 as i16 + low as i16;

    let negative = sum & 0x80 != 0;
    let overflow = !(-128..=127).contains(&signed);

    if sum >= 0xA0 {
        sum += 0x60;
    }

    ArithResult {
        value: sum as u8,
        carry: sum >= 0x100,
        overflow,
        zero: binary.zero,
        negative,
    }
}

/// SBC: `a - operand - !carry_in`.
///
/// Carry set on return means no borrow occurred.
pub fn subtract_with_carry(a: u8, operand: u8, carry_in: bool, decimal: bool) -> ArithResult {
    let binary = ArithResult::binary(a, !operand, carry_in);
    if !decimal {
        return binary;
    }

    let mut low = (a & 0x0F) as i16 - (operand & 0x0F) as i16 + carry_in as i16 - 1;
    if low < 0 {
        low = ((low - 0x06) & 0x0F) - 0x10;
    }

    let mut diff = (a & 0xF0) as i16 - (operand & 0xF0) as i16 + low;
    if diff < 0 {
        diff -= 0x60;
    }

    ArithResult {
        value: diff as u8,
        ..binary
    }
}

/// CMP/CPX/CPY: flags of `register - operand` without storing the result.
pub fn compare(register: u8, operand: u8) -> CompareResult {
    let diff = register.wrapping_sub(operand);
    CompareResult {
        carry: register >= operand,
        zero: register == operand,
        negative: is_negative(diff),
    }
}

/// ASL: bit 7 goes to carry, 0 shifts in.
pub fn shift_left(value: u8) -> ShiftResult {
    ShiftResult {
        value: value << 1,
        carry: value & 0x80 != 0,
    }
}

/// LSR: bit 0 goes to carry, 0 shifts in.
pub fn shift_right(value: u8) -> ShiftResult {
    ShiftResult {
        value: value >> 1,
        carry: value & 0x01 != 0,
    }
}

/// ROL: carry shifts into bit 0, bit 7 goes to carry.
pub fn rotate_left(value: u8, carry_in: bool) -> ShiftResult {
    ShiftResult {
        value: (value << 1) | carry_in as u8,
        carry: value & 0x80 != 0,
    }
}

/// ROR: carry shifts into bit 7, bit 0 goes to carry.
pub fn rotate_right(value: u8, carry_in: bool) -> ShiftResult {
    ShiftResult {
        value: (value >> 1) | ((carry_in as u8) << 7),
        carry: value & 0x01 != 0,
    }
}

/// BIT: Z from `a & operand`, V and N copied from operand bits 6 and 7.
pub fn bit_test(a: u8, operand: u8) -> BitResult {
    BitResult {
        zero: a & operand == 0,
        overflow: operand & 0x40 != 0,
        negative: is_negative(operand),
    }
}
