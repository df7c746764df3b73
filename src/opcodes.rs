//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all 6502 instruction information.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 unassigned opcodes** - Marked [`Slot::Unassigned`] with the "???" mnemonic
//!
//! Each opcode entry includes:
//! - Instruction type and addressing mode
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Instruction size in bytes

use crate::addressing::AddressingMode;

/// A table slot that either holds a real value or marks an unassigned opcode.
///
/// Unassigned opcodes never alias a legitimate addressing mode or instruction
/// type, so invalid-opcode detection is a plain match on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// The opcode has a defined meaning.
    Assigned(T),
    /// The opcode has no defined NMOS 6502 semantics.
    Unassigned,
}

impl<T: Copy> Slot<T> {
    /// Returns the assigned value, if any.
    pub fn assigned(self) -> Option<T> {
        match self {
            Slot::Assigned(value) => Some(value),
            Slot::Unassigned => None,
        }
    }

    /// Returns true for [`Slot::Unassigned`].
    pub const fn is_unassigned(&self) -> bool {
        matches!(self, Slot::Unassigned)
    }
}

/// The 56 documented 6502 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionType {
    // Load/store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Register transfers
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    // Stack
    Pha,
    Php,
    Pla,
    Plp,
    // Logical
    And,
    Eor,
    Ora,
    Bit,
    // Arithmetic
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    // Increments and decrements
    Inc,
    Inx,
    Iny,
    Dec,
    Dex,
    Dey,
    // Shifts
    Asl,
    Lsr,
    Rol,
    Ror,
    // Jumps and calls
    Jmp,
    Jsr,
    Rts,
    // Branches
    Bcc,
    Bcs,
    Beq,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,
    // Status flag changes
    Clc,
    Cld,
    Cli,
    Clv,
    Sec,
    Sed,
    Sei,
    // System
    Brk,
    Nop,
    Rti,
}

impl InstructionType {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        use InstructionType::*;
        match self {
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Txa => "TXA",
            Tya => "TYA",
            Tsx => "TSX",
            Txs => "TXS",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            And => "AND",
            Eor => "EOR",
            Ora => "ORA",
            Bit => "BIT",
            Adc => "ADC",
            Sbc => "SBC",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Asl => "ASL",
            Lsr => "LSR",
            Rol => "ROL",
            Ror => "ROR",
            Jmp => "JMP",
            Jsr => "JSR",
            Rts => "RTS",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Brk => "BRK",
            Nop => "NOP",
            Rti => "RTI",
        }
    }

    /// Read-class instructions pay one extra cycle when an indexed address
    /// crosses a page. Stores and read-modify-write instructions always take
    /// the slow path, which their base cycle count already includes.
    pub const fn is_read(self) -> bool {
        use InstructionType::*;
        matches!(self, Lda | Ldx | Ldy | Adc | Sbc | And | Ora | Eor | Cmp)
    }

    /// Returns true for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        use InstructionType::*;
        matches!(self, Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs)
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, InstructionType, Slot, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.instruction, Slot::Assigned(InstructionType::Lda));
/// assert_eq!(lda_imm.addressing_mode, Slot::Assigned(AddressingMode::Immediate));
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for unassigned opcodes).
    pub mnemonic: &'static str,

    /// Operation performed by this opcode.
    pub instruction: Slot<InstructionType>,

    /// Addressing mode for this instruction.
    pub addressing_mode: Slot<AddressingMode>,

    /// Base cycle cost (before page crossing and branch penalties).
    ///
    /// Documented instructions have cycles in the range 2-7.
    /// Unassigned opcodes are marked with 0 cycles.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Returns true when the opcode has defined semantics.
    pub const fn is_assigned(&self) -> bool {
        !self.instruction.is_unassigned()
    }
}

const fn op(instruction: InstructionType, mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: instruction.mnemonic(),
        instruction: Slot::Assigned(instruction),
        addressing_mode: Slot::Assigned(mode),
        base_cycles,
        size_bytes: 1 + mode.operand_bytes(),
    }
}

const UNASSIGNED: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    instruction: Slot::Unassigned,
    addressing_mode: Slot::Unassigned,
    base_cycles: 0,
    size_bytes: 1,
};

use AddressingMode as M;
use InstructionType as I;

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cpu6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let unassigned = &OPCODE_TABLE[0x02];
/// assert_eq!(unassigned.mnemonic, "???");
/// assert!(!unassigned.is_assigned());
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op(I::Brk, M::Implicit, 7), // 0x00
    op(I::Ora, M::IndirectX, 6), // 0x01
    UNASSIGNED, // 0x02
    UNASSIGNED, // 0x03
    UNASSIGNED, // 0x04
    op(I::Ora, M::ZeroPage, 3), // 0x05
    op(I::Asl, M::ZeroPage, 5), // 0x06
    UNASSIGNED, // 0x07
    op(I::Php, M::Implicit, 3), // 0x08
    op(I::Ora, M::Immediate, 2), // 0x09
    op(I::Asl, M::Accumulator, 2), // 0x0A
    UNASSIGNED, // 0x0B
    UNASSIGNED, // 0x0C
    op(I::Ora, M::Absolute, 4), // 0x0D
    op(I::Asl, M::Absolute, 6), // 0x0E
    UNASSIGNED, // 0x0F

    op(I::Bpl, M::Relative, 2), // 0x10
    op(I::Ora, M::IndirectY, 5), // 0x11
    UNASSIGNED, // 0x12
    UNASSIGNED, // 0x13
    UNASSIGNED, // 0x14
    op(I::Ora, M::ZeroPageX, 4), // 0x15
    op(I::Asl, M::ZeroPageX, 6), // 0x16
    UNASSIGNED, // 0x17
    op(I::Clc, M::Implicit, 2), // 0x18
    op(I::Ora, M::AbsoluteY, 4), // 0x19
    UNASSIGNED, // 0x1A
    UNASSIGNED, // 0x1B
    UNASSIGNED, // 0x1C
    op(I::Ora, M::AbsoluteX, 4), // 0x1D
    op(I::Asl, M::AbsoluteX, 7), // 0x1E
    UNASSIGNED, // 0x1F

    op(I::Jsr, M::Absolute, 6), // 0x20
    op(I::And, M::IndirectX, 6), // 0x21
    UNASSIGNED, // 0x22
    UNASSIGNED, // 0x23
    op(I::Bit, M::ZeroPage, 3), // 0x24
    op(I::And, M::ZeroPage, 3), // 0x25
    op(I::Rol, M::ZeroPage, 5), // 0x26
    UNASSIGNED, // 0x27
    op(I::Plp, M::Implicit, 4), // 0x28
    op(I::And, M::Immediate, 2), // 0x29
    op(I::Rol, M::Accumulator, 2), // 0x2A
    UNASSIGNED, // 0x2B
    op(I::Bit, M::Absolute, 4), // 0x2C
    op(I::And, M::Absolute, 4), // 0x2D
    op(I::Rol, M::Absolute, 6), // 0x2E
    UNASSIGNED, // 0x2F

    op(I::Bmi, M::Relative, 2), // 0x30
    op(I::And, M::IndirectY, 5), // 0x31
    UNASSIGNED, // 0x32
    UNASSIGNED, // 0x33
    UNASSIGNED, // 0x34
    op(I::And, M::ZeroPageX, 4), // 0x35
    op(I::Rol, M::ZeroPageX, 6), // 0x36
    UNASSIGNED, // 0x37
    op(I::Sec, M::Implicit, 2), // 0x38
    op(I::And, M::AbsoluteY, 4), // 0x39
    UNASSIGNED, // 0x3A
    UNASSIGNED, // 0x3B
    UNASSIGNED, // 0x3C
    op(I::And, M::AbsoluteX, 4), // 0x3D
    op(I::Rol, M::AbsoluteX, 7), // 0x3E
    UNASSIGNED, // 0x3F

    op(I::Rti, M::Implicit, 6), // 0x40
    op(I::Eor, M::IndirectX, 6), // 0x41
    UNASSIGNED, // 0x42
    UNASSIGNED, // 0x43
    UNASSIGNED, // 0x44
    op(I::Eor, M::ZeroPage, 3), // 0x45
    op(I::Lsr, M::ZeroPage, 5), // 0x46
    UNASSIGNED, // 0x47
    op(I::Pha, M::Implicit, 3), // 0x48
    op(I::Eor, M::Immediate, 2), // 0x49
    op(I::Lsr, M::Accumulator, 2), // 0x4A
    UNASSIGNED, // 0x4B
    op(I::Jmp, M::Absolute, 3), // 0x4C
    op(I::Eor, M::Absolute, 4), // 0x4D
    op(I::Lsr, M::Absolute, 6), // 0x4E
    UNASSIGNED, // 0x4F

    op(I::Bvc, M::Relative, 2), // 0x50
    op(I::Eor, M::IndirectY, 5), // 0x51
    UNASSIGNED, // 0x52
    UNASSIGNED, // 0x53
    UNASSIGNED, // 0x54
    op(I::Eor, M::ZeroPageX, 4), // 0x55
    op(I::Lsr, M::ZeroPageX, 6), // 0x56
    UNASSIGNED, // 0x57
    op(I::Cli, M::Implicit, 2), // 0x58
    op(I::Eor, M::AbsoluteY, 4), // 0x59
    UNASSIGNED, // 0x5A
    UNASSIGNED, // 0x5B
    UNASSIGNED, // 0x5C
    op(I::Eor, M::AbsoluteX, 4), // 0x5D
    op(I::Lsr, M::AbsoluteX, 7), // 0x5E
    UNASSIGNED, // 0x5F

    op(I::Rts, M::Implicit, 6), // 0x60
    op(I::Adc, M::IndirectX, 6), // 0x61
    UNASSIGNED, // 0x62
    UNASSIGNED, // 0x63
    UNASSIGNED, // 0x64
    op(I::Adc, M::ZeroPage, 3), // 0x65
    op(I::Ror, M::ZeroPage, 5), // 0x66
    UNASSIGNED, // 0x67
    op(I::Pla, M::Implicit, 4), // 0x68
    op(I::Adc, M::Immediate, 2), // 0x69
    op(I::Ror, M::Accumulator, 2), // 0x6A
    UNASSIGNED, // 0x6B
    op(I::Jmp, M::Indirect, 5), // 0x6C
    op(I::Adc, M::Absolute, 4), // 0x6D
    op(I::Ror, M::Absolute, 6), // 0x6E
    UNASSIGNED, // 0x6F

    op(I::Bvs, M::Relative, 2), // 0x70
    op(I::Adc, M::IndirectY, 5), // 0x71
    UNASSIGNED, // 0x72
    UNASSIGNED, // 0x73
    UNASSIGNED, // 0x74
    op(I::Adc, M::ZeroPageX, 4), // 0x75
    op(I::Ror, M::ZeroPageX, 6), // 0x76
    UNASSIGNED, // 0x77
    op(I::Sei, M::Implicit, 2), // 0x78
    op(I::Adc, M::AbsoluteY, 4), // 0x79
    UNASSIGNED, // 0x7A
    UNASSIGNED, // 0x7B
    UNASSIGNED, // 0x7C
    op(I::Adc, M::AbsoluteX, 4), // 0x7D
    op(I::Ror, M::AbsoluteX, 7), // 0x7E
    UNASSIGNED, // 0x7F

    UNASSIGNED, // 0x80
    op(I::Sta, M::IndirectX, 6), // 0x81
    UNASSIGNED, // 0x82
    UNASSIGNED, // 0x83
    op(I::Sty, M::ZeroPage, 3), // 0x84
    op(I::Sta, M::ZeroPage, 3), // 0x85
    op(I::Stx, M::ZeroPage, 3), // 0x86
    UNASSIGNED, // 0x87
    op(I::Dey, M::Implicit, 2), // 0x88
    UNASSIGNED, // 0x89
    op(I::Txa, M::Implicit, 2), // 0x8A
    UNASSIGNED, // 0x8B
    op(I::Sty, M::Absolute, 4), // 0x8C
    op(I::Sta, M::Absolute, 4), // 0x8D
    op(I::Stx, M::Absolute, 4), // 0x8E
    UNASSIGNED, // 0x8F

    op(I::Bcc, M::Relative, 2), // 0x90
    op(I::Sta, M::IndirectY, 6), // 0x91
    UNASSIGNED, // 0x92
    UNASSIGNED, // 0x93
    op(I::Sty, M::ZeroPageX, 4), // 0x94
    op(I::Sta, M::ZeroPageX, 4), // 0x95
    op(I::Stx, M::ZeroPageY, 4), // 0x96
    UNASSIGNED, // 0x97
    op(I::Tya, M::Implicit, 2), // 0x98
    op(I::Sta, M::AbsoluteY, 5), // 0x99
    op(I::Txs, M::Implicit, 2), // 0x9A
    UNASSIGNED, // 0x9B
    UNASSIGNED, // 0x9C
    op(I::Sta, M::AbsoluteX, 5), // 0x9D
    UNASSIGNED, // 0x9E
    UNASSIGNED, // 0x9F

    op(I::Ldy, M::Immediate, 2), // 0xA0
    op(I::Lda, M::IndirectX, 6), // 0xA1
    op(I::Ldx, M::Immediate, 2), // 0xA2
    UNASSIGNED, // 0xA3
    op(I::Ldy, M::ZeroPage, 3), // 0xA4
    op(I::Lda, M::ZeroPage, 3), // 0xA5
    op(I::Ldx, M::ZeroPage, 3), // 0xA6
    UNASSIGNED, // 0xA7
    op(I::Tay, M::Implicit, 2), // 0xA8
    op(I::Lda, M::Immediate, 2), // 0xA9
    op(I::Tax, M::Implicit, 2), // 0xAA
    UNASSIGNED, // 0xAB
    op(I::Ldy, M::Absolute, 4), // 0xAC
    op(I::Lda, M::Absolute, 4), // 0xAD
    op(I::Ldx, M::Absolute, 4), // 0xAE
    UNASSIGNED, // 0xAF

    op(I::Bcs, M::Relative, 2), // 0xB0
    op(I::Lda, M::IndirectY, 5), // 0xB1
    UNASSIGNED, // 0xB2
    UNASSIGNED, // 0xB3
    op(I::Ldy, M::ZeroPageX, 4), // 0xB4
    op(I::Lda, M::ZeroPageX, 4), // 0xB5
    op(I::Ldx, M::ZeroPageY, 4), // 0xB6
    UNASSIGNED, // 0xB7
    op(I::Clv, M::Implicit, 2), // 0xB8
    op(I::Lda, M::AbsoluteY, 4), // 0xB9
    op(I::Tsx, M::Implicit, 2), // 0xBA
    UNASSIGNED, // 0xBB
    op(I::Ldy, M::AbsoluteX, 4), // 0xBC
    op(I::Lda, M::AbsoluteX, 4), // 0xBD
    op(I::Ldx, M::AbsoluteY, 4), // 0xBE
    UNASSIGNED, // 0xBF

    op(I::Cpy, M::Immediate, 2), // 0xC0
    op(I::Cmp, M::IndirectX, 6), // 0xC1
    UNASSIGNED, // 0xC2
    UNASSIGNED, // 0xC3
    op(I::Cpy, M::ZeroPage, 3), // 0xC4
    op(I::Cmp, M::ZeroPage, 3), // 0xC5
    op(I::Dec, M::ZeroPage, 5), // 0xC6
    UNASSIGNED, // 0xC7
    op(I::Iny, M::Implicit, 2), // 0xC8
    op(I::Cmp, M::Immediate, 2), // 0xC9
    op(I::Dex, M::Implicit, 2), // 0xCA
    UNASSIGNED, // 0xCB
    op(I::Cpy, M::Absolute, 4), // 0xCC
    op(I::Cmp, M::Absolute, 4), // 0xCD
    op(I::Dec, M::Absolute, 6), // 0xCE
    UNASSIGNED, // 0xCF

    op(I::Bne, M::Relative, 2), // 0xD0
    op(I::Cmp, M::IndirectY, 5), // 0xD1
    UNASSIGNED, // 0xD2
    UNASSIGNED, // 0xD3
    UNASSIGNED, // 0xD4
    op(I::Cmp, M::ZeroPageX, 4), // 0xD5
    op(I::Dec, M::ZeroPageX, 6), // 0xD6
    UNASSIGNED, // 0xD7
    op(I::Cld, M::Implicit, 2), // 0xD8
    op(I::Cmp, M::AbsoluteY, 4), // 0xD9
    UNASSIGNED, // 0xDA
    UNASSIGNED, // 0xDB
    UNASSIGNED, // 0xDC
    op(I::Cmp, M::AbsoluteX, 4), // 0xDD
    op(I::Dec, M::AbsoluteX, 7), // 0xDE
    UNASSIGNED, // 0xDF

    op(I::Cpx, M::Immediate, 2), // 0xE0
    op(I::Sbc, M::IndirectX, 6), // 0xE1
    UNASSIGNED, // 0xE2
    UNASSIGNED, // 0xE3
    op(I::Cpx, M::ZeroPage, 3), // 0xE4
    op(I::Sbc, M::ZeroPage, 3), // 0xE5
    op(I::Inc, M::ZeroPage, 5), // 0xE6
    UNASSIGNED, // 0xE7
    op(I::Inx, M::Implicit, 2), // 0xE8
    op(I::Sbc, M::Immediate, 2), // 0xE9
    op(I::Nop, M::Implicit, 2), // 0xEA
    UNASSIGNED, // 0xEB
    op(I::Cpx, M::Absolute, 4), // 0xEC
    op(I::Sbc, M::Absolute, 4), // 0xED
    op(I::Inc, M::Absolute, 6), // 0xEE
    UNASSIGNED, // 0xEF

    op(I::Beq, M::Relative, 2), // 0xF0
    op(I::Sbc, M::IndirectY, 5), // 0xF1
    UNASSIGNED, // 0xF2
    UNASSIGNED, // 0xF3
    UNASSIGNED, // 0xF4
    op(I::Sbc, M::ZeroPageX, 4), // 0xF5
    op(I::Inc, M::ZeroPageX, 6), // 0xF6
    UNASSIGNED, // 0xF7
    op(I::Sed, M::Implicit, 2), // 0xF8
    op(I::Sbc, M::AbsoluteY, 4), // 0xF9
    UNASSIGNED, // 0xFA
    UNASSIGNED, // 0xFB
    UNASSIGNED, // 0xFC
    op(I::Sbc, M::AbsoluteX, 4), // 0xFD
    op(I::Inc, M::AbsoluteX, 7), // 0xFE
    UNASSIGNED, // 0xFF
];

/// Addressing mode of `opcode`, or [`Slot::Unassigned`].
pub const fn addressing_mode_of(opcode: u8) -> Slot<AddressingMode> {
    OPCODE_TABLE[opcode as usize].addressing_mode
}

/// Instruction type of `opcode`, or [`Slot::Unassigned`].
pub const fn instruction_type_of(opcode: u8) -> Slot<InstructionType> {
    OPCODE_TABLE[opcode as usize].instruction
}

/// Base cycle count of `opcode`; 0 for unassigned opcodes.
pub const fn base_cycles_of(opcode: u8) -> u8 {
    OPCODE_TABLE[opcode as usize].base_cycles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigned_count() {
        let assigned = OPCODE_TABLE.iter().filter(|m| m.is_assigned()).count();
        assert_eq!(assigned, 151);
    }

    #[test]
    fn test_slots_agree() {
        for opcode in 0..=255u8 {
            assert_eq!(
                addressing_mode_of(opcode).is_unassigned(),
                instruction_type_of(opcode).is_unassigned(),
                "Opcode 0x{:02X} has mismatched slots",
                opcode
            );
        }
    }

    #[test]
    fn test_lookup_functions() {
        assert_eq!(addressing_mode_of(0x6C), Slot::Assigned(AddressingMode::Indirect));
        assert_eq!(instruction_type_of(0x6C), Slot::Assigned(InstructionType::Jmp));
        assert_eq!(base_cycles_of(0x6C), 5);
        assert_eq!(instruction_type_of(0xFF), Slot::Unassigned);
        assert_eq!(base_cycles_of(0xFF), 0);
    }
}
