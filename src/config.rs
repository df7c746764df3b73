//! # CPU Configuration
//!
//! Per-core options that differ between real 6502 variants. No `Default`
//! impl: callers pick a preset or spell the options out.

/// Whether ADC/SBC honour the decimal flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecimalMode {
    /// BCD adjustment applies while D is set (MOS NMOS 6502, 6510).
    Enabled,
    /// D is stored and pushed like any flag but arithmetic stays binary
    /// (Ricoh 2A03/2A07).
    Disabled,
}

/// Configuration for a [`CPU`](crate::CPU).
///
/// # Examples
///
/// ```
/// use cpu6502::{CpuConfig, DecimalMode};
///
/// let nes = CpuConfig::ricoh_2a03();
/// assert_eq!(nes.decimal_mode, DecimalMode::Disabled);
///
/// let custom = CpuConfig { decimal_mode: DecimalMode::Enabled };
/// assert_eq!(custom, CpuConfig::nmos());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuConfig {
    pub decimal_mode: DecimalMode,
}

impl CpuConfig {
    /// Stock NMOS 6502 with working decimal mode.
    pub const fn nmos() -> Self {
        Self {
            decimal_mode: DecimalMode::Enabled,
        }
    }

    /// NES/Famicom CPU, whose decimal circuitry is disconnected.
    pub const fn ricoh_2a03() -> Self {
        Self {
            decimal_mode: DecimalMode::Disabled,
        }
    }

    pub(crate) const fn decimal_enabled(&self) -> bool {
        matches!(self.decimal_mode, DecimalMode::Enabled)
    }
}
