//! Pipeline simulator CLI.
//!
//! Loads a flat binary image, runs a fixed number of cycles (or until the
//! pipeline spins on a self-jump), and dumps architectural state plus the
//! performance counters. Stage-level tracing is available through
//! `RUST_LOG` (for example `RUST_LOG=pipesim_core=trace`).

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pipesim_core::config::{Config, HazardStrategy};
use pipesim_core::sim::loader;
use pipesim_core::{Core, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    version,
    about = "Cycle-accurate five-stage RV32I pipeline simulator",
    long_about = "Run a flat binary image on the pipelined core.\n\n\
        Examples:\n  \
        pipesim program.bin\n  \
        pipesim program.bin --cycles 10000 --hazard stall-only\n  \
        pipesim program.bin --config config.json"
)]
struct Cli {
    /// Flat binary image, loaded at address 0.
    image: PathBuf,

    /// Maximum number of cycles to run.
    #[arg(long, default_value_t = 100_000)]
    cycles: u64,

    /// Hazard strategy: full-bypass or stall-only.
    #[arg(long)]
    hazard: Option<String>,

    /// JSON configuration file (CLI flags override it).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dump the first N words of memory after the run.
    #[arg(long, default_value_t = 16)]
    dump_words: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("error: could not read config '{}': {e}", path.display());
                process::exit(1);
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                eprintln!("error: {e}");
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    if let Some(hazard) = cli.hazard.as_deref() {
        config.hazard = match hazard {
            "full-bypass" | "full_bypass" => HazardStrategy::FullBypass,
            "stall-only" | "stall_only" => HazardStrategy::StallOnly,
            other => {
                eprintln!("error: unknown hazard strategy '{other}'");
                process::exit(1);
            }
        };
    }

    let mut sim = Simulator::new(&config);
    if let Err(e) = loader::load_image_file(&mut sim.core, &cli.image) {
        eprintln!("error: {e}");
        process::exit(1);
    }
    sim.core.reset();

    let used = sim.run_until(cli.cycles, spinning);
    println!(
        "[*] ran {used} cycles ({:?}, {})",
        config.hazard,
        if used == cli.cycles {
            "cycle limit"
        } else {
            "settled"
        }
    );
    println!();
    dump_state(&sim.core, cli.dump_words);
    println!();
    println!("{}", sim.core.stats);
}

/// Detects the idiomatic halt: a `jal x0, 0` spinning at commit.
fn spinning(core: &Core) -> bool {
    const HALT: u32 = 0x0000_006F;
    core.mem_wb.valid && core.mem_wb.inst == HALT
}

fn dump_state(core: &Core, words: u32) {
    println!("pc: {:#010x}", core.pc);
    let regs = core.regs.dump();
    for row in 0..8 {
        let i = row * 4;
        println!(
            "x{i:<2} {:#010x}  x{:<2} {:#010x}  x{:<2} {:#010x}  x{:<2} {:#010x}",
            regs[i],
            i + 1,
            regs[i + 1],
            i + 2,
            regs[i + 2],
            i + 3,
            regs[i + 3]
        );
    }
    println!();
    for w in 0..words {
        let addr = w * 4;
        if w % 4 == 0 {
            print!("{addr:#06x}:");
        }
        print!(" {:#010x}", core.mem.read_word(addr));
        if w % 4 == 3 {
            println!();
        }
    }
    if words % 4 != 0 {
        println!();
    }
}
