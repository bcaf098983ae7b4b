//! Loads, stores, and register-to-register transfers.

use super::super::Cpu;
use crate::bus::Bus;

pub(super) fn lda<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    cpu.a = cpu.fetch(bus);
    cpu.update_zero_negative(cpu.a);
}

pub(super) fn ldx<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    cpu.x = cpu.fetch(bus);
    cpu.update_zero_negative(cpu.x);
}

pub(super) fn ldy<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    cpu.y = cpu.fetch(bus);
    cpu.update_zero_negative(cpu.y);
}

pub(super) fn sta<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    bus.write(cpu.addr_abs, cpu.a);
}

pub(super) fn stx<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    bus.write(cpu.addr_abs, cpu.x);
}

pub(super) fn sty<B: Bus>(cpu: &mut Cpu, bus: &mut B) {
    bus.write(cpu.addr_abs, cpu.y);
}

pub(super) fn tax(cpu: &mut Cpu) {
    cpu.x = cpu.a;
    cpu.update_zero_negative(cpu.x);
}

pub(super) fn tay(cpu: &mut Cpu) {
    cpu.y = cpu.a;
    cpu.update_zero_negative(cpu.y);
}

pub(super) fn tsx(cpu: &mut Cpu) {
    cpu.x = cpu.sp;
    cpu.update_zero_negative(cpu.x);
}

pub(super) fn txa(cpu: &mut Cpu) {
    cpu.a = cpu.x;
    cpu.update_zero_negative(cpu.a);
}

/// No flags are affected — unlike every other transfer instruction.
pub(super) fn txs(cpu: &mut Cpu) {
    cpu.sp = cpu.x;
}

pub(super) fn tya(cpu: &mut Cpu) {
    cpu.a = cpu.y;
    cpu.update_zero_negative(cpu.a);
}
