//! Ties addressing-mode evaluation and instruction execution together for
//! one `clock()`-triggered opcode fetch.
//!
//! The reference this engine is built from combines the page-crossing
//! signal from the addressing mode with a same-shaped signal from the
//! instruction by bitwise-ANDing two 0/1 bytes. Here the two signals are
//! kept as plain, named values instead of overloading a bitwise operator:
//! the extra cycle is charged only when the addressing mode reports a page
//! crossing *and* the instruction is page-penalty eligible.

use super::addressing;
use super::instructions;
use super::opcodes::{Mnemonic, OPCODE_TABLE};
use super::{Cpu, CpuFault};
use crate::bus::Bus;

pub(crate) fn step<B: Bus>(cpu: &mut Cpu, bus: &mut B) -> Result<(), CpuFault> {
    let entry = OPCODE_TABLE[cpu.opcode as usize];

    if entry.mnemonic == Mnemonic::XXX {
        return Err(CpuFault {
            pc: cpu.pc.wrapping_sub(1),
            opcode: cpu.opcode,
        });
    }

    let extra_from_addressing = addressing::eval(entry.mode, cpu, bus);
    let extra_from_instruction = entry.page_penalty_eligible as u8;
    let page_penalty = extra_from_addressing & extra_from_instruction;

    cpu.cycles_remaining = entry.cycles + page_penalty;

    instructions::execute(entry.mnemonic, cpu, bus);

    Ok(())
}
