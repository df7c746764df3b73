//! Tests for the stack, register transfer and flag instructions.
//!
//! Tests cover:
//! - PHA/PLA and PHP/PLP, including the B and bit 5 handling of PHP
//! - Stack pointer wraparound within page one
//! - TAX, TAY, TXA, TYA, TSX (flags) and TXS (no flags)
//! - The seven flag set/clear instructions

use cpu6502::{CpuConfig, FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory, CpuConfig::nmos())
}

// ========== Stack ==========

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    // PHA / LDA #$00 / PLA
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.sp(), 0xFE);
    assert_eq!(cpu.memory().read(0x01FF), 0x42);

    cpu.step().unwrap();
    assert!(cpu.flag_z());

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_pla_sets_negative() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFE);
    cpu.memory_mut().write(0x01FF, 0x80);
    cpu.memory_mut().write(0x8000, 0x68);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_push_wraps_stack_pointer() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0x00);
    cpu.set_a(0x99);
    cpu.memory_mut().write(0x8000, 0x48);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0100), 0x99);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_php_sets_b_and_bit_5_on_the_copy() {
    let mut cpu = setup_cpu();
    cpu.set_status(0b1000_0001); // N C
    cpu.memory_mut().write(0x8000, 0x08);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.memory().read(0x01FF), 0b1011_0001);
    assert!(!cpu.flag_b());
}

#[test]
fn test_plp_loads_every_flag() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFD);
    cpu.memory_mut().write(0x01FE, 0xFF);
    cpu.memory_mut().write(0x01FF, 0x00);
    // PLP / PLP
    cpu.memory_mut().load(0x8000, &[0x28, 0x28]);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.status(), 0xFF);

    cpu.step().unwrap();
    assert_eq!(cpu.status(), 0x20);
}

#[test]
fn test_php_plp_round_trip() {
    let mut cpu = setup_cpu();
    cpu.set_status(0b1100_1011);
    // PHP / CLC / CLV / PLP
    cpu.memory_mut().load(0x8000, &[0x08, 0x18, 0xB8, 0x28]);

    for _ in 0..4 {
        cpu.step().unwrap();
    }
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== Transfers ==========

#[test]
fn test_tax_tay() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.memory_mut().load(0x8000, &[0xAA, 0xA8]);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x80);
}

#[test]
fn test_txa_tya() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00);
    cpu.set_y(0x33);
    cpu.set_a(0x55);
    cpu.memory_mut().load(0x8000, &[0x8A, 0x98]);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x33);
    assert!(!cpu.flag_z());
}

#[test]
fn test_tsx_sets_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xBA);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_txs_leaves_flags() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00);
    cpu.set_status(0b1000_0000);
    cpu.memory_mut().write(0x8000, 0x9A);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.sp(), 0x00);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

// ========== Flags ==========

#[test]
fn test_flag_instructions() {
    let mut cpu = setup_cpu();
    // SEC / SED / SEI / CLC / CLD / CLI
    cpu.memory_mut()
        .load(0x8000, &[0x38, 0xF8, 0x78, 0x18, 0xD8, 0x58]);

    for _ in 0..3 {
        assert_eq!(cpu.step(), Ok(2));
    }
    assert!(cpu.flag_c());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());

    for _ in 0..3 {
        cpu.step().unwrap();
    }
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_i());
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu();
    cpu.set_flag_v(true);
    cpu.memory_mut().write(0x8000, 0xB8);

    cpu.step().unwrap();
    assert!(!cpu.flag_v());
}

#[test]
fn test_clc_is_idempotent() {
    let mut cpu = setup_cpu();
    cpu.set_status(0b1100_1110);
    let before = cpu.status();
    cpu.memory_mut().load(0x8000, &[0x18, 0x18]);

    cpu.step().unwrap();
    assert_eq!(cpu.status(), before);
    cpu.step().unwrap();
    assert_eq!(cpu.status(), before);
}
