#![doc = r#"
A cycle-accurate MOS 6502 CPU core.

Modules:
- bus: the `Bus` capability trait CPU memory access flows through, plus a
  flat RAM bus for functional-test fixtures
- cpu: register file, status flags, addressing modes, the 256-entry opcode
  table, instruction semantics, and the tick-driven `clock()` state machine
- disasm: pure disassembly/trace-line rendering, shared by test harnesses
  and the CLI

This crate has no notion of video, audio, or any particular host memory
map — see the sibling `c64` crate for a concrete embedding.
"#]

pub mod bus;
pub mod cpu;
pub mod disasm;

pub use bus::{Bus, Interrupt, RamBus};
pub use cpu::{Cpu, CpuFault, RegisterView};
