//! Property-based tests for addressing mode calculations.
//!
//! These tests verify that all 13 addressing modes correctly calculate
//! effective addresses and handle edge cases like zero-page wraparound
//! and page boundary crossing, both through the resolver directly and
//! through instructions executed on a CPU.

use cpu6502::{resolve, AddressingMode, CpuConfig, FlatMemory, MemoryBus, Operand, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory, CpuConfig::nmos())
}

fn page(addr: u16) -> u16 {
    addr & 0xFF00
}

// ========== Resolver ==========

proptest! {
    /// Property: Zero page indexed modes never leave page zero
    #[test]
    fn prop_zero_page_indexed_wraps(base in any::<u8>(), index in any::<u8>()) {
        let memory = FlatMemory::new();

        let x = resolve(AddressingMode::ZeroPageX, base, 0, 0x8002, index, 0, &memory);
        let y = resolve(AddressingMode::ZeroPageY, base, 0, 0x8002, 0, index, &memory);

        let expected = Operand::Address(base.wrapping_add(index) as u16);
        prop_assert_eq!(x.operand, expected);
        prop_assert_eq!(y.operand, expected);
        prop_assert!(!x.page_crossed && !y.page_crossed);
    }

    /// Property: Absolute indexed modes wrap at 16 bits and flag page crossings
    #[test]
    fn prop_absolute_indexed(lo in any::<u8>(), hi in any::<u8>(), index in any::<u8>()) {
        let memory = FlatMemory::new();
        let base = u16::from_le_bytes([lo, hi]);
        let expected = base.wrapping_add(index as u16);

        let x = resolve(AddressingMode::AbsoluteX, lo, hi, 0x8003, index, 0, &memory);
        let y = resolve(AddressingMode::AbsoluteY, lo, hi, 0x8003, 0, index, &memory);

        prop_assert_eq!(x.operand, Operand::Address(expected));
        prop_assert_eq!(y.operand, Operand::Address(expected));
        prop_assert_eq!(x.page_crossed, page(base) != page(expected));
        prop_assert_eq!(y.page_crossed, x.page_crossed);
    }

    /// Property: (zp,X) reads its pointer from page zero, wrapping the high byte
    #[test]
    fn prop_indexed_indirect_pointer(zp in any::<u8>(), x in any::<u8>(), target in any::<u16>()) {
        let mut memory = FlatMemory::new();
        let pointer = zp.wrapping_add(x);
        memory.write(pointer as u16, target as u8);
        memory.write(pointer.wrapping_add(1) as u16, (target >> 8) as u8);

        let r = resolve(AddressingMode::IndirectX, zp, 0, 0x8002, x, 0, &memory);
        prop_assert_eq!(r.operand, Operand::Address(target));
        prop_assert!(!r.page_crossed);
    }

    /// Property: (zp),Y adds Y after dereferencing and flags page crossings
    #[test]
    fn prop_indirect_indexed_pointer(zp in any::<u8>(), y in any::<u8>(), base in any::<u16>()) {
        let mut memory = FlatMemory::new();
        memory.write(zp as u16, base as u8);
        memory.write(zp.wrapping_add(1) as u16, (base >> 8) as u8);

        let r = resolve(AddressingMode::IndirectY, zp, 0, 0x8002, 0, y, &memory);
        let expected = base.wrapping_add(y as u16);
        prop_assert_eq!(r.operand, Operand::Address(expected));
        prop_assert_eq!(r.page_crossed, page(base) != page(expected));
    }

    /// Property: JMP indirect never carries into the pointer's high byte
    #[test]
    fn prop_indirect_stays_in_pointer_page(lo in any::<u8>(), hi in any::<u8>(), a in any::<u8>(), b in any::<u8>()) {
        let mut memory = FlatMemory::new();
        let pointer = u16::from_le_bytes([lo, hi]);
        let hi_addr = u16::from_le_bytes([lo.wrapping_add(1), hi]);
        memory.write(pointer, a);
        memory.write(hi_addr, b);

        let r = resolve(AddressingMode::Indirect, lo, hi, 0x8003, 0, 0, &memory);
        prop_assert_eq!(r.operand, Operand::Address(u16::from_le_bytes([a, b])));
    }

    /// Property: Relative targets are offsets from the next instruction
    #[test]
    fn prop_relative_target(pc in any::<u16>(), offset in any::<u8>()) {
        let memory = FlatMemory::new();

        let r = resolve(AddressingMode::Relative, offset, 0, pc, 0, 0, &memory);
        let expected = (pc as i32 + offset as i8 as i32) as u16;
        prop_assert_eq!(r.operand, Operand::Address(expected));
        prop_assert_eq!(r.page_crossed, page(pc) != page(expected));
    }

    /// Property: Immediate carries the byte itself, not an address
    #[test]
    fn prop_immediate_is_value(value in any::<u8>()) {
        let memory = FlatMemory::new();
        let r = resolve(AddressingMode::Immediate, value, 0xAA, 0x8002, 0, 0, &memory);
        prop_assert_eq!(r.operand, Operand::Immediate(value));
        prop_assert_eq!(r.address(), None);
    }
}

// ========== Through the CPU ==========

proptest! {
    /// Property: LDA $zp,X reads the wrapped zero page address
    #[test]
    fn prop_lda_zero_page_x(base in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.memory_mut().write(base.wrapping_add(x) as u16, value);
        cpu.memory_mut().load(0x8000, &[0xB5, base]);

        prop_assert_eq!(cpu.step(), Ok(4));
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: LDA abs,Y pays the page penalty exactly when the page changes
    #[test]
    fn prop_lda_absolute_y_timing(base in 0x0200u16..0x7F00, y in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        let effective = base + y as u16;
        cpu.memory_mut().write(effective, value);
        cpu.memory_mut().load(0x8000, &[0xB9, base as u8, (base >> 8) as u8]);

        let expected = if page(base) != page(effective) { 5 } else { 4 };
        prop_assert_eq!(cpu.step(), Ok(expected));
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: STA abs,X always takes 5 cycles
    #[test]
    fn prop_sta_absolute_x_fixed_timing(base in 0x0200u16..0x7F00, x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.set_a(value);
        cpu.memory_mut().load(0x8000, &[0x9D, base as u8, (base >> 8) as u8]);

        prop_assert_eq!(cpu.step(), Ok(5));
        prop_assert_eq!(cpu.memory().read(base + x as u16), value);
    }
}
