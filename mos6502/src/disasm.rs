//! Disassembly and trace-line rendering.
//!
//! Every function here is a pure read of (bus, register) state: reads go
//! through the bus in `read_only` mode so that disassembling a program
//! never perturbs memory-mapped I/O.

use crate::bus::Bus;
use crate::cpu::addressing::Mode;
use crate::cpu::opcodes::OPCODE_TABLE;
use crate::cpu::RegisterView;

/// Renders the 8-bit status register as `CZIDBUVN`, using `.` for a
/// cleared bit, in that fixed bit order (C first, N last).
pub fn flags_string(p: u8) -> String {
    const LABELS: [(u8, char); 8] = [
        (0x01, 'C'),
        (0x02, 'Z'),
        (0x04, 'I'),
        (0x08, 'D'),
        (0x10, 'B'),
        (0x20, 'U'),
        (0x40, 'V'),
        (0x80, 'N'),
    ];
    LABELS
        .iter()
        .map(|&(bit, label)| if p & bit != 0 { label } else { '.' })
        .collect()
}

struct Decoded {
    mnemonic: &'static str,
    mode: Mode,
    non_standard: bool,
    operand: String,
    len: u16,
}

fn decode<B: Bus>(bus: &mut B, addr: u16) -> Decoded {
    let opcode = bus.read(addr, true);
    let entry = OPCODE_TABLE[opcode as usize];
    let next = addr.wrapping_add(1);
    let next2 = addr.wrapping_add(2);

    let (operand, len) = match entry.mode {
        Mode::Imp => (String::new(), 1),
        Mode::Imm => (format!("#${:02X}", bus.read(next, true)), 2),
        Mode::Zp0 => (format!("${:02X}", bus.read(next, true)), 2),
        Mode::Zpx => (format!("${:02X},X", bus.read(next, true)), 2),
        Mode::Zpy => (format!("${:02X},Y", bus.read(next, true)), 2),
        Mode::Rel => {
            let offset = bus.read(next, true) as i8;
            let target = next2.wrapping_add(offset as i16 as u16);
            (format!("${:04X}", target), 2)
        }
        Mode::Abs => {
            let lo = bus.read(next, true) as u16;
            let hi = bus.read(next2, true) as u16;
            (format!("${:04X}", (hi << 8) | lo), 3)
        }
        Mode::Abx => {
            let lo = bus.read(next, true) as u16;
            let hi = bus.read(next2, true) as u16;
            (format!("${:04X},X", (hi << 8) | lo), 3)
        }
        Mode::Aby => {
            let lo = bus.read(next, true) as u16;
            let hi = bus.read(next2, true) as u16;
            (format!("${:04X},Y", (hi << 8) | lo), 3)
        }
        Mode::Ind => {
            let lo = bus.read(next, true) as u16;
            let hi = bus.read(next2, true) as u16;
            (format!("(${:04X})", (hi << 8) | lo), 3)
        }
        Mode::Izx => (format!("(${:02X},X)", bus.read(next, true)), 2),
        Mode::Izy => (format!("(${:02X}),Y", bus.read(next, true)), 2),
    };

    Decoded {
        mnemonic: entry.mnemonic.name(),
        mode: entry.mode,
        non_standard: entry.non_standard,
        operand,
        len,
    }
}

/// Renders the instruction at `addr` as `"$AAAA {ns}{mnem} {operand:<7} [{mode}]"`.
pub fn disassemble<B: Bus>(bus: &mut B, addr: u16) -> String {
    let decoded = decode(bus, addr);
    let ns = if decoded.non_standard { '*' } else { ' ' };
    format!(
        "${:04X} {}{} {:<7} [{}]",
        addr,
        ns,
        decoded.mnemonic,
        decoded.operand,
        decoded.mode.tag()
    )
}

/// Returns the byte length (1-3) of the instruction at `addr`, without
/// otherwise rendering it — useful for a disassembly loop that wants to
/// advance past variable-width instructions.
pub fn instruction_len<B: Bus>(bus: &mut B, addr: u16) -> u16 {
    decode(bus, addr).len
}

fn raw_bytes<B: Bus>(bus: &mut B, addr: u16, len: u16) -> String {
    (0..len)
        .map(|i| format!("{:02X}", bus.read(addr.wrapping_add(i), true)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single Nintendulator-style trace line combining the disassembly at
/// `pc` with a register/cycle snapshot, for `--trace` CLI output and for
/// comparing against golden logs in integration tests.
pub fn trace_line<B: Bus>(bus: &mut B, regs: RegisterView, total_cycles: u64) -> String {
    let decoded = decode(bus, regs.pc);
    let ns = if decoded.non_standard { '*' } else { ' ' };
    let bytes = raw_bytes(bus, regs.pc, decoded.len);
    format!(
        "{:04X}  {:<9}{}{} {:<28}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{} {} {}",
        regs.pc,
        bytes,
        ns,
        decoded.mnemonic,
        decoded.operand,
        regs.a,
        regs.x,
        regs.y,
        regs.p,
        regs.sp,
        total_cycles,
        decoded.mode.tag(),
        flags_string(regs.p),
    )
}
