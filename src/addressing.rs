//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns an addressing mode plus the bytes following an
//! opcode into an effective operand.
//!
//! All effective-address arithmetic wraps at 16 bits, and the zero-page modes
//! wrap at 8 bits. The one deliberate defect is the indirect `JMP` page wrap,
//! which the resolver reproduces.

use crate::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (branch if zero flag set, offset is relative to PC)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40, read 16-bit address from that ZP location, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load from result)
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Where an instruction finds its operand once the addressing mode has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand at all.
    Implied,
    /// The accumulator register is both source and destination.
    Accumulator,
    /// The operand byte itself.
    Immediate(u8),
    /// An effective address in the 64KB address space.
    ///
    /// For `Relative` mode this is the branch target, and for `Indirect`
    /// mode it is the jump target read through the pointer.
    Address(u16),
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// The effective operand.
    pub operand: Operand,
    /// True when indexing (or a branch target) moved into a different page.
    ///
    /// Only used for timing; it never affects which address is accessed.
    pub page_crossed: bool,
}

impl Resolved {
    const fn new(operand: Operand) -> Self {
        Self {
            operand,
            page_crossed: false,
        }
    }

    const fn indexed(base: u16, address: u16) -> Self {
        Self {
            operand: Operand::Address(address),
            page_crossed: (base & 0xFF00) != (address & 0xFF00),
        }
    }

    /// Returns the effective address, if the operand lives in memory.
    pub fn address(&self) -> Option<u16> {
        match self.operand {
            Operand::Address(addr) => Some(addr),
            _ => None,
        }
    }
}

/// Reads a little-endian pointer from zero page, wrapping the high byte
/// fetch within page 0.
fn read_zero_page_pointer<M: MemoryBus>(memory: &M, zp: u8) -> u16 {
    let lo = memory.read(zp as u16) as u16;
    let hi = memory.read(zp.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Resolves an addressing mode to its effective operand.
///
/// # Arguments
///
/// * `mode` - Addressing mode of the instruction
/// * `lo` - First byte after the opcode (ignored by 0-byte modes)
/// * `hi` - Second byte after the opcode (ignored by 0- and 1-byte modes)
/// * `pc` - Address of the next instruction, i.e. after all operand bytes
/// * `x`, `y` - Current index register values
/// * `memory` - Memory for the pointer-reading modes
///
/// # Examples
///
/// ```
/// use cpu6502::{resolve, AddressingMode, FlatMemory, Operand};
///
/// let memory = FlatMemory::new();
///
/// // $FF,X with X = 1 wraps to $00, never $0100
/// let r = resolve(AddressingMode::ZeroPageX, 0xFF, 0, 0x8002, 1, 0, &memory);
/// assert_eq!(r.operand, Operand::Address(0x0000));
/// ```
pub fn resolve<M: MemoryBus>(
    mode: AddressingMode,
    lo: u8,
    hi: u8,
    pc: u16,
    x: u8,
    y: u8,
    memory: &M,
) -> Resolved {
    let absolute = ((hi as u16) << 8) | lo as u16;

    match mode {
        AddressingMode::Implicit => Resolved::new(Operand::Implied),
        AddressingMode::Accumulator => Resolved::new(Operand::Accumulator),
        AddressingMode::Immediate => Resolved::new(Operand::Immediate(lo)),

        AddressingMode::ZeroPage => Resolved::new(Operand::Address(lo as u16)),
        AddressingMode::ZeroPageX => Resolved::new(Operand::Address(lo.wrapping_add(x) as u16)),
        AddressingMode::ZeroPageY => Resolved::new(Operand::Address(lo.wrapping_add(y) as u16)),

        AddressingMode::Absolute => Resolved::new(Operand::Address(absolute)),
        AddressingMode::AbsoluteX => Resolved::indexed(absolute, absolute.wrapping_add(x as u16)),
        AddressingMode::AbsoluteY => Resolved::indexed(absolute, absolute.wrapping_add(y as u16)),

        AddressingMode::Indirect => {
            let target_lo = memory.read(absolute) as u16;
            // NMOS defect: the pointer's high byte never carries into the next page
            let hi_addr = (absolute & 0xFF00) | (absolute.wrapping_add(1) & 0x00FF);
            let target_hi = memory.read(hi_addr) as u16;
            Resolved::new(Operand::Address((target_hi << 8) | target_lo))
        }

        AddressingMode::IndirectX => {
            let pointer = read_zero_page_pointer(memory, lo.wrapping_add(x));
            Resolved::new(Operand::Address(pointer))
        }

        AddressingMode::IndirectY => {
            let base = read_zero_page_pointer(memory, lo);
            Resolved::indexed(base, base.wrapping_add(y as u16))
        }

        AddressingMode::Relative => {
            let target = pc.wrapping_add_signed(lo as i8 as i16);
            Resolved::indexed(pc, target)
        }
    }
}
