use std::error::Error;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mos6502::{disasm, Cpu, RamBus};

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a flat binary against a bare RAM bus until a fault or tick limit
    Run(RunArgs),
    /// Boot a full C64 shell from BASIC/CHARACTER/KERNAL ROM images
    Boot(BootArgs),
    /// Disassemble a flat binary starting at a given address
    Disasm(DisasmArgs),
}

#[derive(Parser)]
struct RunArgs {
    /// Flat binary to load into RAM
    #[arg(long)]
    rom: PathBuf,
    /// Address the binary is loaded at
    #[arg(long, value_parser = parse_addr)]
    load: u16,
    /// Address written into the reset vector ($FFFC/$FFFD)
    #[arg(long, value_parser = parse_addr)]
    reset: u16,
    /// Print a trace line for every completed instruction
    #[arg(long)]
    trace: bool,
    /// Stop after this many completed instructions even if no fault occurs
    #[arg(long)]
    max_ticks: Option<u64>,
}

#[derive(Parser)]
struct BootArgs {
    #[arg(long)]
    basic: PathBuf,
    #[arg(long)]
    char: PathBuf,
    #[arg(long)]
    kernal: PathBuf,
    /// Stop once the KERNAL has written its READY prompt to screen memory
    #[arg(long)]
    until_ready: bool,
    /// Safety cap in case --until-ready never triggers
    #[arg(long, default_value_t = 10_000_000)]
    max_ticks: u64,
}

#[derive(Parser)]
struct DisasmArgs {
    #[arg(long)]
    rom: PathBuf,
    #[arg(long, value_parser = parse_addr)]
    load: u16,
    #[arg(long, value_parser = parse_addr)]
    from: u16,
    #[arg(long)]
    count: usize,
}

fn parse_addr(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("$")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    u16::from_str_radix(digits, radix).map_err(|e| format!("invalid address {s:?}: {e}"))
}

#[derive(Debug)]
struct CliError(String);

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError(e.to_string())
    }
}

impl From<c64::ShellError> for CliError {
    fn from(e: c64::ShellError) -> Self {
        CliError(e.to_string())
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => run(args),
        Commands::Boot(args) => boot(args),
        Commands::Disasm(args) => disassemble(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: RunArgs) -> Result<(), CliError> {
    let program = fs::read(&args.rom)?;

    let mut bus = RamBus::new();
    bus.load(args.load, &program);
    bus.set_vector(0xFFFC, args.reset);

    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    while !cpu.complete() {
        cpu.clock(&mut bus).expect("reset sequence never faults");
    }

    let mut ticks: u64 = 0;
    loop {
        if args.trace && cpu.complete() {
            println!("{}", disasm::trace_line(&mut bus, cpu.registers(), cpu.total_cycles()));
        }

        match cpu.clock(&mut bus) {
            Ok(()) => {}
            Err(fault) => {
                log::warn!("halted on illegal opcode ${:02X} at ${:04X}", fault.opcode, fault.pc);
                break;
            }
        }

        if cpu.complete() {
            ticks += 1;
            if let Some(max) = args.max_ticks {
                if ticks >= max {
                    break;
                }
            }
        }
    }

    println!(
        "halted: pc=${:04X} a=${:02X} x=${:02X} y=${:02X} sp=${:02X} p=${:02X} cycles={}",
        cpu.registers().pc,
        cpu.registers().a,
        cpu.registers().x,
        cpu.registers().y,
        cpu.registers().sp,
        cpu.registers().p,
        cpu.total_cycles(),
    );
    Ok(())
}

fn boot(args: BootArgs) -> Result<(), CliError> {
    let roms = c64::RomSet::load(&args.basic, &args.char, &args.kernal)?;
    let mut shell = c64::C64::new(roms);

    for _ in 0..args.max_ticks {
        shell.clock();
        if args.until_ready && shell.peek(0x04CD) == 0x2E {
            break;
        }
    }

    println!(
        "pc=${:04X} cycles={}",
        shell.cpu().pc,
        shell.system_clock()
    );
    Ok(())
}

fn disassemble(args: DisasmArgs) -> Result<(), CliError> {
    let program = fs::read(&args.rom)?;
    let mut bus = RamBus::new();
    bus.load(args.load, &program);

    let mut addr = args.from;
    for _ in 0..args.count {
        println!("{}", disasm::disassemble(&mut bus, addr));
        addr = addr.wrapping_add(disasm::instruction_len(&mut bus, addr));
    }
    Ok(())
}
