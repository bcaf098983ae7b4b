//! Bitwise logical instructions.

use super::super::flags::StatusFlag;
use super::super::Cpu;
use crate::bus::Bus;

pub(super) fn and<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    let m = cpu.fetch(bus);
    cpu.a &= m;
    cpu.update_zero_negative(cpu.a);
}

pub(super) fn ora<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    let m = cpu.fetch(bus);
    cpu.a |= m;
    cpu.update_zero_negative(cpu.a);
}

pub(super) fn eor<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    let m = cpu.fetch(bus);
    cpu.a ^= m;
    cpu.update_zero_negative(cpu.a);
}

/// Z comes from `a & m`; N and V are copied straight from bits 7 and 6 of
/// the operand, not from the masked result.
pub(super) fn bit<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    let m = cpu.fetch(bus);
    let temp = cpu.a & m;
    cpu.set_flag(StatusFlag::Zero, temp == 0);
    cpu.set_flag(StatusFlag::Negative, m & StatusFlag::Negative.bit() != 0);
    cpu.set_flag(StatusFlag::Overflow, m & StatusFlag::Overflow.bit() != 0);
}
