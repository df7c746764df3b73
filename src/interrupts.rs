//! # Interrupt and Reset Sequencing
//!
//! The 6502 has three ways to redirect execution from outside the instruction
//! stream:
//!
//! | Request | Vector | Cycles | Masked by I | Pushes PC/P |
//! |---------|--------|--------|-------------|-------------|
//! | RESET   | $FFFC  | 6      | no          | no          |
//! | NMI     | $FFFA  | 7      | no          | yes         |
//! | IRQ     | $FFFE  | 7      | yes         | yes         |
//!
//! Requests are only sampled at instruction boundaries, when the cycle debt
//! is idle. Priority is RESET, then NMI, then IRQ.
//!
//! ## Line Semantics
//!
//! - **NMI is edge-triggered**: a rising edge latches one request, which is
//!   cleared when serviced. Holding the line high does not fire again.
//! - **IRQ is level-sensitive**: it is serviced at every boundary where the
//!   line is high and I is clear. Devices behind [`MemoryBus::irq_active`]
//!   share the same line.
//!
//! BRK is not handled here; it is an instruction that reuses the IRQ vector.

use crate::{MemoryBus, CPU};

/// NMI vector address.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector address.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector address.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// An interrupt the CPU is about to service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Reset,
    Nmi,
    Irq,
}

impl Interrupt {
    /// Vector the program counter is loaded from.
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Reset => RESET_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq => IRQ_VECTOR,
        }
    }

    /// Cycle cost of the service sequence.
    pub const fn cycles(self) -> u8 {
        match self {
            Interrupt::Reset => 6,
            Interrupt::Nmi | Interrupt::Irq => 7,
        }
    }
}

/// Pending interrupt inputs, as set by the embedding driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterruptLines {
    reset: bool,
    nmi_level: bool,
    nmi_latched: bool,
    irq_level: bool,
}

impl InterruptLines {
    pub fn request_reset(&mut self) {
        self.reset = true;
    }

    /// Drives the NMI input. Only a low-to-high transition latches a request.
    pub fn set_nmi(&mut self, level: bool) {
        if level && !self.nmi_level {
            self.nmi_latched = true;
        }
        self.nmi_level = level;
    }

    pub fn set_irq(&mut self, level: bool) {
        self.irq_level = level;
    }

    pub fn irq_level(&self) -> bool {
        self.irq_level
    }

    pub fn nmi_latched(&self) -> bool {
        self.nmi_latched
    }

    pub fn reset_requested(&self) -> bool {
        self.reset
    }

    /// Picks the request to service at this instruction boundary, if any.
    ///
    /// `irq_line` is the combined IRQ level (driver plus bus devices) and
    /// `interrupt_disable` the current I flag.
    pub fn poll(&self, irq_line: bool, interrupt_disable: bool) -> Option<Interrupt> {
        if self.reset {
            Some(Interrupt::Reset)
        } else if self.nmi_latched {
            Some(Interrupt::Nmi)
        } else if irq_line && !interrupt_disable {
            Some(Interrupt::Irq)
        } else {
            None
        }
    }

    /// Clears the request that has just been serviced. IRQ has no latch.
    pub fn acknowledge(&mut self, interrupt: Interrupt) {
        match interrupt {
            Interrupt::Reset => self.reset = false,
            Interrupt::Nmi => self.nmi_latched = false,
            Interrupt::Irq => {}
        }
    }
}

/// Runs the service sequence for `interrupt` and returns its cycle cost.
pub(crate) fn service<M: MemoryBus>(cpu: &mut CPU<M>, interrupt: Interrupt) -> u8 {
    match interrupt {
        Interrupt::Reset => {
            log::debug!("RESET via ${:04X}", RESET_VECTOR);
            cpu.a = 0;
            cpu.x = 0;
            cpu.y = 0;
            cpu.sp = 0xFF;
            cpu.flag_n = false;
            cpu.flag_v = false;
            cpu.flag_b = false;
            cpu.flag_d = false;
            cpu.flag_i = true;
            cpu.flag_z = true;
            cpu.flag_c = false;
        }
        Interrupt::Nmi | Interrupt::Irq => {
            log::trace!(
                "{:?} at PC=${:04X} via ${:04X}",
                interrupt,
                cpu.pc,
                interrupt.vector()
            );
            cpu.push_word(cpu.pc);
            // Hardware interrupts push B clear
            cpu.flag_b = false;
            cpu.push(cpu.status());
            cpu.flag_i = true;
        }
    }

    cpu.pc = cpu.read_word(interrupt.vector());
    interrupt.cycles()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nmi_latches_on_rising_edge_only() {
        let mut lines = InterruptLines::default();

        lines.set_nmi(true);
        assert!(lines.nmi_latched());

        lines.acknowledge(Interrupt::Nmi);
        lines.set_nmi(true); // still high, no new edge
        assert!(!lines.nmi_latched());

        lines.set_nmi(false);
        lines.set_nmi(true);
        assert!(lines.nmi_latched());
    }

    #[test]
    fn test_priority() {
        let mut lines = InterruptLines::default();
        lines.set_irq(true);
        assert_eq!(lines.poll(true, false), Some(Interrupt::Irq));
        assert_eq!(lines.poll(true, true), None);

        lines.set_nmi(true);
        assert_eq!(lines.poll(true, true), Some(Interrupt::Nmi));

        lines.request_reset();
        assert_eq!(lines.poll(true, true), Some(Interrupt::Reset));
    }

    #[test]
    fn test_irq_has_no_latch() {
        let mut lines = InterruptLines::default();
        lines.set_irq(true);
        lines.acknowledge(Interrupt::Irq);
        assert_eq!(lines.poll(true, false), Some(Interrupt::Irq));

        lines.set_irq(false);
        assert_eq!(lines.poll(false, false), None);
    }
}
