//! Shift and rotate instructions; all four operate on either the
//! accumulator (implied mode) or a memory operand, writing the result back
//! through [`Cpu::write_back`].

use super::super::flags::StatusFlag;
use super::super::Cpu;
use crate::bus::Bus;

pub(super) fn asl<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    let m = cpu.fetch(bus);
    cpu.set_flag(StatusFlag::Carry, m & 0x80 != 0);
    let result = m << 1;
    cpu.update_zero_negative(result);
    cpu.write_back(bus, result);
}

pub(super) fn lsr<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    let m = cpu.fetch(bus);
    cpu.set_flag(StatusFlag::Carry, m & 0x01 != 0);
    let result = m >> 1;
    cpu.set_flag(StatusFlag::Zero, result == 0);
    cpu.set_flag(StatusFlag::Negative, false);
    cpu.write_back(bus, result);
}

pub(super) fn rol<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    let m = cpu.fetch(bus) as u16;
    let carry_in = cpu.flag(StatusFlag::Carry) as u16;
    let shifted = (m << 1) | carry_in;
    cpu.set_flag(StatusFlag::Carry, shifted & 0xFF00 != 0);
    let result = shifted as u8;
    cpu.update_zero_negative(result);
    cpu.write_back(bus, result);
}

pub(super) fn ror<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    let m = cpu.fetch(bus);
    let carry_out = m & 0x01;
    let carry_in = cpu.flag(StatusFlag::Carry) as u8;
    let result = (carry_in << 7) | (m >> 1);
    cpu.set_flag(StatusFlag::Carry, carry_out != 0);
    cpu.update_zero_negative(result);
    cpu.write_back(bus, result);
}
