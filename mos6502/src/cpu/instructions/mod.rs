//! Instruction semantics, split roughly the way the reference source groups
//! its instruction methods: arithmetic/compare, logical, shift/rotate,
//! load/store/transfer, branch/jump, stack, system/flag control, and the
//! undocumented composite opcodes.

mod arithmetic;
mod branch_jump;
mod illegal;
mod load_store;
mod logical;
mod shift_rotate;
mod stack;
mod system;

use super::opcodes::Mnemonic;
use super::Cpu;
use crate::bus::Bus;

pub(crate) fn execute<B: Bus>(mnemonic: Mnemonic, cpu: &mut Cpu, bus: &mut B) {
    use Mnemonic::*;
    match mnemonic {
        ADC => arithmetic::adc(cpu, bus),
        SBC => arithmetic::sbc(cpu, bus),
        CMP => arithmetic::cmp(cpu, bus),
        CPX => arithmetic::cpx(cpu, bus),
        CPY => arithmetic::cpy(cpu, bus),
        DEC => arithmetic::dec(cpu, bus),
        DEX => arithmetic::dex(cpu),
        DEY => arithmetic::dey(cpu),
        INC => arithmetic::inc(cpu, bus),
        INX => arithmetic::inx(cpu),
        INY => arithmetic::iny(cpu),

        AND => logical::and(cpu, bus),
        ORA => logical::ora(cpu, bus),
        EOR => logical::eor(cpu, bus),
        BIT => logical::bit(cpu, bus),

        ASL => shift_rotate::asl(cpu, bus),
        LSR => shift_rotate::lsr(cpu, bus),
        ROL => shift_rotate::rol(cpu, bus),
        ROR => shift_rotate::ror(cpu, bus),

        LDA => load_store::lda(cpu, bus),
        LDX => load_store::ldx(cpu, bus),
        LDY => load_store::ldy(cpu, bus),
        STA => load_store::sta(cpu, bus),
        STX => load_store::stx(cpu, bus),
        STY => load_store::sty(cpu, bus),
        TAX => load_store::tax(cpu),
        TAY => load_store::tay(cpu),
        TSX => load_store::tsx(cpu),
        TXA => load_store::txa(cpu),
        TXS => load_store::txs(cpu),
        TYA => load_store::tya(cpu),

        BCC => branch_jump::bcc(cpu),
        BCS => branch_jump::bcs(cpu),
        BEQ => branch_jump::beq(cpu),
        BMI => branch_jump::bmi(cpu),
        BNE => branch_jump::bne(cpu),
        BPL => branch_jump::bpl(cpu),
        BVC => branch_jump::bvc(cpu),
        BVS => branch_jump::bvs(cpu),
        JMP => branch_jump::jmp(cpu),
        JSR => branch_jump::jsr(cpu, bus),
        RTS => branch_jump::rts(cpu, bus),

        PHA => stack::pha(cpu, bus),
        PHP => stack::php(cpu, bus),
        PLA => stack::pla(cpu, bus),
        PLP => stack::plp(cpu, bus),

        BRK => system::brk(cpu, bus),
        RTI => system::rti(cpu, bus),
        CLC => system::clc(cpu),
        CLD => system::cld(cpu),
        CLI => system::cli(cpu),
        CLV => system::clv(cpu),
        SEC => system::sec(cpu),
        SED => system::sed(cpu),
        SEI => system::sei(cpu),
        NOP => {}

        ANC => illegal::anc(cpu, bus),
        DCP => illegal::dcp(cpu, bus),
        ISB => illegal::isb(cpu, bus),
        LAX => illegal::lax(cpu, bus),
        RLA => illegal::rla(cpu, bus),
        RRA => illegal::rra(cpu, bus),
        SAX => illegal::sax(cpu, bus),
        SLO => illegal::slo(cpu, bus),
        SRE => illegal::sre(cpu, bus),

        XXX => unreachable!("XXX opcodes are intercepted as a CpuFault before dispatch"),
    }
}
