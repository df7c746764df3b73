//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 56 documented 6502
//! instructions, organized by category. Each instruction is a standalone
//! function taking the CPU and its already-resolved operand; operand fetch,
//! base cycles and the indexed page-cross penalty are handled by
//! [`CPU::execute`](crate::CPU::execute).
//!
//! ## Categories
//!
//! - **arithmetic**: ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

mod arithmetic;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::addressing::Resolved;
use crate::{InstructionType, MemoryBus, CPU};

/// Applies `instruction` to the CPU.
///
/// Returns extra cycles beyond the base count that the instruction itself
/// decides on (taken branches); everything else returns 0.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: InstructionType,
    resolved: Resolved,
) -> u8 {
    use InstructionType::*;

    let operand = resolved.operand;

    match instruction {
        Lda => load_store::execute_lda(cpu, operand),
        Ldx => load_store::execute_ldx(cpu, operand),
        Ldy => load_store::execute_ldy(cpu, operand),
        Sta => load_store::execute_sta(cpu, operand),
        Stx => load_store::execute_stx(cpu, operand),
        Sty => load_store::execute_sty(cpu, operand),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        And => arithmetic::execute_and(cpu, operand),
        Eor => arithmetic::execute_eor(cpu, operand),
        Ora => arithmetic::execute_ora(cpu, operand),
        Bit => arithmetic::execute_bit(cpu, operand),
        Adc => arithmetic::execute_adc(cpu, operand),
        Sbc => arithmetic::execute_sbc(cpu, operand),
        Cmp => {
            let register = cpu.a;
            arithmetic::execute_compare(cpu, register, operand)
        }
        Cpx => {
            let register = cpu.x;
            arithmetic::execute_compare(cpu, register, operand)
        }
        Cpy => {
            let register = cpu.y;
            arithmetic::execute_compare(cpu, register, operand)
        }

        Inc => inc_dec::execute_inc(cpu, operand),
        Dec => inc_dec::execute_dec(cpu, operand),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Asl => shifts::execute_asl(cpu, operand),
        Lsr => shifts::execute_lsr(cpu, operand),
        Rol => shifts::execute_rol(cpu, operand),
        Ror => shifts::execute_ror(cpu, operand),

        Jmp => control::execute_jmp(cpu, operand),
        Jsr => control::execute_jsr(cpu, operand),
        Rts => control::execute_rts(cpu),
        Rti => control::execute_rti(cpu),
        Brk => control::execute_brk(cpu),
        Nop => {}

        Bcc | Bcs | Beq | Bne | Bmi | Bpl | Bvs | Bvc => {
            let taken = match instruction {
                Bcc => !cpu.flag_c,
                Bcs => cpu.flag_c,
                Beq => cpu.flag_z,
                Bne => !cpu.flag_z,
                Bmi => cpu.flag_n,
                Bpl => !cpu.flag_n,
                Bvs => cpu.flag_v,
                _ => !cpu.flag_v,
            };
            return branches::execute_branch(cpu, taken, resolved);
        }

        Clc => flags::execute_clc(cpu),
        Cld => flags::execute_cld(cpu),
        Cli => flags::execute_cli(cpu),
        Clv => flags::execute_clv(cpu),
        Sec => flags::execute_sec(cpu),
        Sed => flags::execute_sed(cpu),
        Sei => flags::execute_sei(cpu),
    }

    0
}
