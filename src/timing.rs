//! # Cycle Debt
//!
//! The CPU does all the work of an instruction on the first cycle it is
//! clocked for, then owes the remaining cycles before it may fetch again.
//! [`CycleDebt`] tracks that balance as a two-state machine so an external
//! clock can call [`CPU::tick`](crate::CPU::tick) once per hardware cycle.

/// Cycles still owed by the instruction (or interrupt sequence) in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleDebt {
    /// Ready to sample interrupts and fetch the next opcode.
    #[default]
    Idle,
    /// This many cycles remain before the next fetch. Never zero.
    Busy(u8),
}

impl CycleDebt {
    /// Debt left after an operation costing `cycles` consumed the current cycle.
    pub const fn after(cycles: u8) -> Self {
        match cycles {
            0 | 1 => CycleDebt::Idle,
            n => CycleDebt::Busy(n - 1),
        }
    }

    /// Returns true when the next tick may fetch.
    pub const fn is_idle(&self) -> bool {
        matches!(self, CycleDebt::Idle)
    }

    /// Cycles still owed.
    pub const fn remaining(&self) -> u8 {
        match self {
            CycleDebt::Idle => 0,
            CycleDebt::Busy(n) => *n,
        }
    }

    /// Pays one cycle of debt.
    ///
    /// Returns false when there was nothing owed, which means the caller
    /// should do real work this cycle instead.
    pub fn pay(&mut self) -> bool {
        match *self {
            CycleDebt::Idle => false,
            CycleDebt::Busy(1) => {
                *self = CycleDebt::Idle;
                true
            }
            CycleDebt::Busy(n) => {
                *self = CycleDebt::Busy(n - 1);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_charges_remaining_cycles() {
        assert_eq!(CycleDebt::after(0), CycleDebt::Idle);
        assert_eq!(CycleDebt::after(1), CycleDebt::Idle);
        assert_eq!(CycleDebt::after(2), CycleDebt::Busy(1));
        assert_eq!(CycleDebt::after(7), CycleDebt::Busy(6));
    }

    #[test]
    fn test_pay_counts_down_to_idle() {
        let mut debt = CycleDebt::after(4);
        assert_eq!(debt.remaining(), 3);

        assert!(debt.pay());
        assert!(debt.pay());
        assert!(debt.pay());
        assert!(debt.is_idle());

        // Nothing owed: caller must do work
        assert!(!debt.pay());
        assert!(debt.is_idle());
    }
}
