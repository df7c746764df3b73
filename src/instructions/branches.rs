//! # Branch Instructions
//!
//! This module implements the eight conditional branches (BCC, BCS, BEQ,
//! BNE, BMI, BPL, BVC, BVS). The condition is evaluated by the dispatcher;
//! this module only handles the jump and its timing.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! from the address of the following instruction.

use crate::addressing::{Operand, Resolved};
use crate::{MemoryBus, CPU};

/// Executes a conditional branch.
///
/// Cycle timing (base is 2):
/// - +0 if branch not taken
/// - +1 if branch taken to same page
/// - +2 if branch taken to different page
///
/// No flags are affected. Returns the extra cycles.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, taken: bool, resolved: Resolved) -> u8 {
    if !taken {
        return 0;
    }

    if let Operand::Address(target) = resolved.operand {
        cpu.pc = target;
    }

    if resolved.page_crossed {
        2
    } else {
        1
    }
}
