//! Fuzz target for clocked CPU execution.
//!
//! Builds an arbitrary register file, memory image and interrupt schedule,
//! then drives two identical CPUs: one with `step` and one with `tick`. Both
//! must agree on state and cycle count, and neither may panic.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, Registers, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC status byte
    p: u8,
    /// Run with decimal arithmetic disabled (2A03)
    ricoh: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes placed at 0x8000
    program: [u8; 32],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Vectors at 0xFFFA-0xFFFF
    vectors: [u8; 6],
}

/// Interrupt line changes applied before an instruction.
#[derive(Debug, Arbitrary)]
enum LineEvent {
    None,
    Nmi,
    Irq(bool),
    Reset,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    events: [LineEvent; 8],
}

fn build_cpu(input: &FuzzInput) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x8000, &input.memory.program);
    memory.load(0xFFFA, &input.memory.vectors);

    let config = if input.cpu_state.ricoh {
        CpuConfig::ricoh_2a03()
    } else {
        CpuConfig::nmos()
    };

    let mut cpu = CPU::new(memory, config);
    cpu.load_registers(&Registers {
        pc: 0x8000,
        sp: input.cpu_state.sp,
        a: input.cpu_state.a,
        x: input.cpu_state.x,
        y: input.cpu_state.y,
        p: input.cpu_state.p,
    });
    cpu
}

fn apply(cpu: &mut CPU<FlatMemory>, event: &LineEvent) {
    match event {
        LineEvent::None => {}
        LineEvent::Nmi => cpu.trigger_nmi(),
        LineEvent::Irq(level) => cpu.set_irq(*level),
        LineEvent::Reset => cpu.request_reset(),
    }
}

fuzz_target!(|input: FuzzInput| {
    let mut stepped = build_cpu(&input);
    let mut ticked = build_cpu(&input);

    for event in &input.events {
        apply(&mut stepped, event);
        apply(&mut ticked, event);

        let pc = stepped.pc();
        let cycles = match stepped.step() {
            Ok(cycles) => cycles,
            Err(ExecutionError::InvalidOpcode { address, .. }) => {
                assert_eq!(address, pc);
                assert_eq!(stepped.pc(), pc);
                assert!(ticked.tick().is_err());
                return;
            }
        };
        assert!((2..=7).contains(&cycles));

        for _ in 0..cycles {
            ticked.tick().expect("ticked CPU diverged from stepped CPU");
        }

        assert!(ticked.debt().is_idle());
        assert_eq!(ticked.registers(), stepped.registers());
        assert_eq!(ticked.cycles(), stepped.cycles());
        assert_eq!(ticked.memory().read(0x01FF), stepped.memory().read(0x01FF));
    }
});
