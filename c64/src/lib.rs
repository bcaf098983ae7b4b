#![doc = r#"
A thin Commodore 64 memory-map shell built on the `mos6502` core.

This crate owns no CPU semantics of its own: it pairs a [`mos6502::Cpu`]
with a [`MemoryMap`] that implements [`mos6502::Bus`] against a banked
64 KiB address space (RAM shadowed by BASIC/CHARACTER/KERNAL ROM
depending on the $0001 processor-port bits). The two live in separate
fields so the borrow checker can see the CPU and its bus as disjoint,
the same split the core itself uses between `Cpu` and `Bus`.
"#]

use mos6502::{Bus, Cpu, Interrupt, RegisterView};

mod rom;

pub use rom::{RomSet, ShellError};

const BASIC_BASE: u16 = 0xA000;
const CHAR_BASE: u16 = 0xD000;
const CHAR_TOP: u16 = 0xDFFF;
const KERNAL_BASE: u16 = 0xE000;
const IO_BASE: u16 = 0xD000;
const IO_TOP: u16 = 0xDFFF;
const VIC_TOP: u16 = 0xD3FF;
const SID_TOP: u16 = 0xD7FF;
const COLOR_RAM_TOP: u16 = 0xDBFF;
const CIA1_TOP: u16 = 0xDCFF;
const CIA2_TOP: u16 = 0xDDFF;
const IO1_TOP: u16 = 0xDEFF;
const RASTER_COUNTER: u16 = 0xD012;
const PORT_DDR: u16 = 0x0000;
const PORT_DATA: u16 = 0x0001;
const DEFAULT_PORT: u8 = 0b010;

struct PortBits {
    loram: bool,
    hiram: bool,
    charen: bool,
}

impl PortBits {
    fn from_byte(value: u8) -> Self {
        Self {
            loram: value & 0b001 != 0,
            hiram: value & 0b010 != 0,
            charen: value & 0b100 != 0,
        }
    }
}

fn io_subsystem_label(addr: u16) -> &'static str {
    match addr {
        0xD000..=VIC_TOP => "VIC-II",
        0xD400..=SID_TOP => "SID",
        0xD800..=COLOR_RAM_TOP => "COLOR RAM",
        0xDC00..=CIA1_TOP => "CIA1",
        0xDD00..=CIA2_TOP => "CIA2",
        0xDE00..=IO1_TOP => "I/O1",
        _ => "I/O2",
    }
}

/// The banked 64 KiB address space a C64's CPU sees: plain RAM, shadowed
/// by BASIC/CHARACTER/KERNAL ROM images depending on the processor port.
pub struct MemoryMap {
    ram: [u8; 0x1_0000],
    basic_rom: [u8; 0x2000],
    char_rom: [u8; 0x1000],
    kernal_rom: [u8; 0x2000],
    pending_interrupt: Interrupt,
}

impl MemoryMap {
    fn new(roms: RomSet) -> Self {
        Self {
            ram: [0; 0x1_0000],
            basic_rom: roms.basic,
            char_rom: roms.char_rom,
            kernal_rom: roms.kernal,
            pending_interrupt: Interrupt::None,
        }
    }

    fn port(&self) -> PortBits {
        PortBits::from_byte(self.ram[PORT_DATA as usize])
    }

    fn take_pending_interrupt(&mut self) -> Interrupt {
        std::mem::replace(&mut self.pending_interrupt, Interrupt::None)
    }
}

impl Bus for MemoryMap {
    fn read(&mut self, addr: u16, read_only: bool) -> u8 {
        let port = self.port();

        if port.hiram && port.loram && (BASIC_BASE..CHAR_BASE).contains(&addr) {
            return self.basic_rom[(addr - BASIC_BASE) as usize];
        }

        if port.charen && (port.hiram || port.loram) && (IO_BASE..=IO_TOP).contains(&addr) {
            if addr == RASTER_COUNTER {
                return 0x00;
            }
            if !read_only {
                log::trace!("c64: [{}] reading ${addr:04X}", io_subsystem_label(addr));
            }
            return self.ram[addr as usize];
        }

        if (port.hiram || port.loram) && (CHAR_BASE..=CHAR_TOP).contains(&addr) {
            return self.char_rom[(addr - CHAR_BASE) as usize];
        }

        if port.hiram && (KERNAL_BASE..=0xFFFF).contains(&addr) {
            return self.kernal_rom[(addr - KERNAL_BASE) as usize];
        }

        self.ram[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            PORT_DDR => log::debug!("c64: [CPU IO $0] <- ${value:02X}"),
            PORT_DATA => log::debug!("c64: [CPU IO $1] <- ${value:02X}"),
            IO_BASE..=IO_TOP => {
                log::trace!(
                    "c64: [{}] writing ${addr:04X} <- ${value:02X}",
                    io_subsystem_label(addr)
                );
            }
            _ => {}
        }
        self.ram[addr as usize] = value;
    }

    fn raise_interrupt(&mut self, interrupt: Interrupt) {
        self.pending_interrupt = interrupt;
    }
}

/// A Commodore 64: a [`Cpu`] paired with its banked [`MemoryMap`].
pub struct C64 {
    cpu: Cpu,
    bus: MemoryMap,
    system_clock: u64,
}

impl C64 {
    /// Builds a shell with the given ROM images already copied in, then
    /// performs a reset.
    pub fn new(roms: RomSet) -> Self {
        let mut shell = Self {
            cpu: Cpu::new(),
            bus: MemoryMap::new(roms),
            system_clock: 0,
        };
        shell.reset();
        shell
    }

    /// Performs the CPU reset sequence and restores the default port value.
    pub fn reset(&mut self) {
        self.bus.ram[PORT_DATA as usize] = DEFAULT_PORT;
        self.cpu.reset(&mut self.bus);
    }

    /// Advances the CPU by one tick, then delivers any latched interrupt.
    /// Returns `true` when the CPU has retired its in-flight instruction.
    pub fn clock(&mut self) -> bool {
        if let Err(fault) = self.cpu.clock(&mut self.bus) {
            log::warn!(
                "c64: cpu fault ${:02X} at ${:04X}, halting is the caller's choice",
                fault.opcode,
                fault.pc
            );
        }

        match self.bus.take_pending_interrupt() {
            Interrupt::Nmi => self.cpu.nmi(&mut self.bus),
            Interrupt::Irq => self.cpu.irq(&mut self.bus),
            Interrupt::None => {}
        }

        self.system_clock += 1;
        self.cpu.complete()
    }

    pub fn cpu(&self) -> RegisterView {
        self.cpu.registers()
    }

    pub fn system_clock(&self) -> u64 {
        self.system_clock
    }

    /// Direct read/write access to the banked address space, e.g. for a
    /// CLI that wants to peek at screen memory without going through the
    /// CPU (see Scenario G).
    pub fn peek(&mut self, addr: u16) -> u8 {
        self.bus.read(addr, true)
    }

    /// Single-line rendering of the instruction at `addr`, delegating to
    /// [`mos6502::disasm::disassemble`] against this shell's banked bus.
    pub fn disassemble(&mut self, addr: u16) -> String {
        mos6502::disasm::disassemble(&mut self.bus, addr)
    }
}
