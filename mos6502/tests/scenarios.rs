//! Crate-level integration scenarios that exercise the CPU against a bare
//! RAM bus, as opposed to the inline unit tests beside each module.

use mos6502::{Bus, Cpu, RamBus};

fn run_to_completion(cpu: &mut Cpu, bus: &mut RamBus) {
    while !cpu.complete() {
        cpu.clock(bus).expect("scenario fixtures never hit a trap opcode");
    }
}

#[test]
fn scenario_a_reset_vector() {
    let mut bus = RamBus::new();
    bus.set_vector(0xFFFC, 0x7FA5);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    assert_eq!(cpu.registers().pc, 0x7FA5);
    assert_eq!(cpu.registers().sp, 0xFD);
    assert_eq!(cpu.registers().p, 0x24); // U|I
}

#[test]
fn scenario_b_lda_immediate() {
    let mut bus = RamBus::new();
    bus.set_vector(0xFFFC, 0x0100);
    bus.load(0x0100, &[0xA9, 0x42]);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    run_to_completion(&mut cpu, &mut bus);

    cpu.clock(&mut bus).unwrap();
    run_to_completion(&mut cpu, &mut bus);

    assert_eq!(cpu.registers().a, 0x42);
    assert_eq!(cpu.registers().pc, 0x0102);
    assert!(!flag_set(cpu.registers().p, 0x02)); // Z clear
    assert!(!flag_set(cpu.registers().p, 0x80)); // N clear
}

#[test]
fn scenario_c_indirect_jmp_page_bug() {
    let mut bus = RamBus::new();
    bus.set_vector(0xFFFC, 0x7FA7);
    bus.load(0x7FA7, &[0x6C, 0xFF, 0xA5]);
    bus.ram[0xA5FF] = 0xC1;
    bus.ram[0xA500] = 0xC3;
    bus.ram[0xA600] = 0xC2;
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    run_to_completion(&mut cpu, &mut bus);
    cpu.clock(&mut bus).unwrap();
    run_to_completion(&mut cpu, &mut bus);
    assert_eq!(cpu.registers().pc, 0xC3C1);
}

/// Runs a freshly reset CPU through one instruction and returns how many
/// cycles that single instruction consumed.
fn cycles_for_next_instruction(cpu: &mut Cpu, bus: &mut RamBus) -> u64 {
    let before = cpu.total_cycles();
    cpu.clock(bus).unwrap();
    run_to_completion(cpu, bus);
    cpu.total_cycles() - before
}

#[test]
fn scenario_d_abx_page_penalty() {
    // LDX #$FF ; LDA $DEAD,X -- $DEAD+$FF = $DFAC, crosses into a new page.
    let mut bus = RamBus::new();
    bus.set_vector(0xFFFC, 0x0200);
    bus.load(0x0200, &[0xA2, 0xFF, 0xBD, 0xAD, 0xDE]);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    run_to_completion(&mut cpu, &mut bus);
    let _ = cycles_for_next_instruction(&mut cpu, &mut bus); // LDX #$FF
    let lda_cycles = cycles_for_next_instruction(&mut cpu, &mut bus);
    assert_eq!(lda_cycles, 5, "page-crossing ABX load takes base 4 + 1 penalty");

    // LDX #$0A ; LDA $DEAD,X -- $DEAD+$0A = $DEB7, stays on the same page.
    let mut bus = RamBus::new();
    bus.set_vector(0xFFFC, 0x0200);
    bus.load(0x0200, &[0xA2, 0x0A, 0xBD, 0xAD, 0xDE]);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    run_to_completion(&mut cpu, &mut bus);
    let _ = cycles_for_next_instruction(&mut cpu, &mut bus); // LDX #$0A
    let lda_cycles = cycles_for_next_instruction(&mut cpu, &mut bus);
    assert_eq!(lda_cycles, 4, "same-page ABX load takes only the base cycles");
}

fn flag_set(p: u8, bit: u8) -> bool {
    p & bit != 0
}

#[test]
fn property_total_cycles_strictly_monotonic_over_ram_only_program() {
    let mut bus = RamBus::new();
    bus.set_vector(0xFFFC, 0x0300);
    // LDX #$05 ; loop: DEX ; BNE loop ; BRK
    bus.load(0x0300, &[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x00]);
    bus.set_vector(0xFFFE, 0x0400);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);

    let mut last = cpu.total_cycles();
    for _ in 0..200 {
        if cpu.clock(&mut bus).is_err() {
            break;
        }
        let now = cpu.total_cycles();
        assert!(now > last, "total_cycles must strictly increase every tick");
        last = now;
    }
}

#[test]
fn property_stack_roundtrip_via_pha_pla_for_sampled_values() {
    for v in [0x00u8, 0x01, 0x7F, 0x80, 0xFF, 0x42] {
        let mut bus = RamBus::new();
        bus.set_vector(0xFFFC, 0x0200);
        // LDA #v ; PHA ; LDA #$00 ; PLA
        bus.load(0x0200, &[0xA9, v, 0x48, 0xA9, 0x00, 0x68]);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        run_to_completion(&mut cpu, &mut bus);
        let sp_before = cpu.registers().sp;

        for _ in 0..4 {
            cpu.clock(&mut bus).unwrap();
            run_to_completion(&mut cpu, &mut bus);
        }

        assert_eq!(cpu.registers().a, v);
        assert_eq!(cpu.registers().sp, sp_before);
    }
}

#[test]
fn property_irq_entry_clears_break_and_sets_unused() {
    // CLI so the interrupt-disable flag set by reset() does not mask the IRQ.
    let mut bus = RamBus::new();
    bus.set_vector(0xFFFC, 0x0200);
    bus.set_vector(0xFFFE, 0x9000);
    bus.load(0x0200, &[0x58]); // CLI
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    run_to_completion(&mut cpu, &mut bus);
    cpu.clock(&mut bus).unwrap();
    run_to_completion(&mut cpu, &mut bus);

    cpu.irq(&mut bus);
    assert_eq!(cpu.registers().pc, 0x9000);

    let sp_after_irq = cpu.registers().sp;
    let pushed_status = bus.ram[0x0100 + sp_after_irq as usize + 1];
    assert!(!flag_set(pushed_status, 0x10), "IRQ entry must push B=0");
    assert!(flag_set(pushed_status, 0x20), "IRQ entry must push U=1");
}

#[test]
#[ignore = "requires the Klaus Dormann 6502 functional-test ROM at tests/data/6502_functional_test.bin"]
fn scenario_e_klaus_dormann_functional_test() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/6502_functional_test.bin");
    let program = std::fs::read(&path).unwrap_or_else(|_| {
        panic!("missing fixture: {}. This ROM is out of this repository's scope; download it separately.", path.display())
    });

    let mut bus = RamBus::new();
    bus.load(0x0000, &program);
    bus.set_vector(0xFFFC, 0x0400);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    run_to_completion(&mut cpu, &mut bus);

    let mut last_pc = cpu.registers().pc;
    loop {
        cpu.clock(&mut bus).expect("functional test ROM never executes a trap opcode");
        if !cpu.complete() {
            continue;
        }
        let pc = cpu.registers().pc;
        if pc == 0x3469 {
            break;
        }
        assert_ne!(pc, last_pc, "functional test trapped at ${:04X}", pc);
        last_pc = pc;
    }
}

#[test]
#[ignore = "requires the 6502 timing-test program at tests/data/timing_test.bin"]
fn scenario_f_timing_test() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/timing_test.bin");
    let program = std::fs::read(&path).unwrap_or_else(|_| {
        panic!("missing fixture: {}. This ROM is out of this repository's scope; provide it separately.", path.display())
    });

    let mut bus = RamBus::new();
    bus.load(0x1000, &program);
    bus.set_vector(0xFFFC, 0x1000);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    run_to_completion(&mut cpu, &mut bus);

    loop {
        cpu.clock(&mut bus).expect("timing test program never executes a trap opcode");
        if cpu.complete() && cpu.registers().pc == 0x1269 {
            break;
        }
    }
    assert_eq!(cpu.total_cycles(), 1141);
}
