//! pagesim CLI: run an LRU page replacement simulation over an address file.

use std::path::PathBuf;

use clap::Parser;
use pagesim::{
    load_addresses, PageNumber, Simulation, SimulationConfig, SimulationReport, DEFAULT_PAGE_SIZE,
    DEFAULT_SEPARATOR,
};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Simulate LRU page replacement over a list of memory addresses")]
#[command(version)]
struct Cli {
    /// File with addresses, e.g. `0100,0822,0555`
    file: PathBuf,

    /// Page size in bytes (defaults to 200)
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u64,

    /// Number of frames in physical memory
    #[arg(short, long)]
    frames: usize,

    /// Separator between addresses
    #[arg(short, long, default_value_t = DEFAULT_SEPARATOR)]
    separator: char,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> pagesim::Result<()> {
    let config = SimulationConfig::new(cli.page_size, cli.frames)?.with_separator(cli.separator);
    let addresses = load_addresses(&cli.file, config.separator())?;
    println!(
        "Found {} addresses in {}",
        addresses.len(),
        cli.file.display()
    );

    let report = Simulation::new(config).run(&addresses)?;
    print_report(&report, cli.quiet);
    Ok(())
}

fn format_pages(pages: &[PageNumber]) -> String {
    let inner: Vec<String> = pages.iter().map(|p| p.0.to_string()).collect();
    format!("[{}]", inner.join(", "))
}

fn print_report(report: &SimulationReport, quiet: bool) {
    println!("==============================");
    println!("LRU page replacement simulation");
    println!("Page size:        {} bytes", report.config.page_size());
    println!("Frames:           {}", report.config.frame_count());
    println!("Total addresses:  {}", report.steps.len());
    println!("Reference string: {}", format_pages(&report.reference_string));

    if !quiet {
        let total = report.steps.len();
        for step in &report.steps {
            println!(
                "\nAddress {}/{}: {} -> page {}",
                step.index, total, step.address, step.page().0
            );
            if step.outcome.is_hit() {
                println!("Page {} already in memory, marked as most recently used.", step.page().0);
            } else {
                println!("--> Page fault! Loading page {}.", step.page().0);
                if let Some(victim) = step.outcome.evicted {
                    println!("Evicting page {} to make room.", victim.0);
                }
            }
            println!("Memory (MRU -> LRU): {}", format_pages(&step.outcome.resident));
        }
    }

    println!("\nSimulation complete.");
    println!("Total page faults: {}", report.fault_count());
    println!("Hit rate:          {:.2}%", report.stats.hit_rate() * 100.0);
    println!("Final memory:      {}", format_pages(&report.final_resident));
    println!("==============================");
}
