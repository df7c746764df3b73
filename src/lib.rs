//! # 6502 CPU Execution Core
//!
//! A cycle-stepped NMOS 6502 CPU core designed to be driven by an external clock.
//!
//! The crate reproduces the register set, status flags, the thirteen addressing
//! modes, all 151 documented opcodes, and RESET/NMI/IRQ sequencing, including
//! the hardware quirks programs depend on: page-crossing cycle penalties, the
//! indirect `JMP` page-wrap defect, NMOS decimal-mode flags and branch timing.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDX #$05 / DEX / BNE -3
//! memory.load(0x8000, &[0xA2, 0x05, 0xCA, 0xD0, 0xFD]);
//!
//! let mut cpu = CPU::new(memory, CpuConfig::nmos());
//!
//! // Drive it one clock cycle at a time
//! cpu.run_for_cycles(2 + 5 * 2 + 4 * 3 + 2).unwrap();
//! assert_eq!(cpu.x(), 0);
//! assert_eq!(cpu.pc(), 0x8005);
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven decode**: [`OPCODE_TABLE`] maps each opcode byte to an
//!   instruction type, addressing mode and base cycle count. Unassigned opcodes
//!   are a distinct [`Slot::Unassigned`] variant.
//! - **Address resolution**: [`resolve`] turns a mode plus operand bytes into
//!   an effective operand and a page-crossing flag.
//! - **Pure ALU**: [`alu`] computes results and flags without touching state.
//! - **Cycle debt**: the CPU does an instruction's work on its first cycle and
//!   owes the rest ([`CycleDebt`]), so the driver can call [`CPU::tick`] once
//!   per hardware cycle.
//! - **Interrupts**: RESET, NMI (edge) and IRQ (level) are sampled at
//!   instruction boundaries only.
//!
//! ## Undocumented Opcodes
//!
//! Executing an unassigned opcode returns [`ExecutionError::InvalidOpcode`]
//! and leaves PC on the opcode. Whether that halts the machine, skips bytes or
//! substitutes behaviour is the driver's decision.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and flat implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and the resolver
//! - `alu` - Arithmetic and flag computation
//! - `interrupts` - RESET/NMI/IRQ sequencing
//! - `timing` - Cycle debt state machine
//! - `config` - Per-core options

pub mod addressing;
pub mod alu;
pub mod config;
pub mod cpu;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod timing;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{resolve, AddressingMode, Operand, Resolved};
pub use config::{CpuConfig, DecimalMode};
pub use cpu::{Registers, CPU};
pub use interrupts::{Interrupt, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{
    addressing_mode_of, base_cycles_of, instruction_type_of, InstructionType, OpcodeMetadata,
    Slot, OPCODE_TABLE,
};
pub use timing::CycleDebt;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The opcode has no defined NMOS 6502 instruction.
    ///
    /// `address` is where the opcode was fetched from; PC is left there.
    InvalidOpcode { opcode: u8, address: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::InvalidOpcode { opcode, address } => {
                write!(f, "Invalid opcode 0x{:02X} at 0x{:04X}", opcode, address)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
