//! Reads a permutation, builds its twin tree and converts it into a Baxter
//! permutation.
//!
//! ```console
//! $ cargo run --example baxterize -- 2 4 1 3
//! ```

use baxter_rs::baxter::is_baxter_seq;
use baxter_rs::twin::TwinTree;
use clap::Parser;

#[derive(Parser)]
struct Args {
    /// The permutation, as whitespace-separated values.
    #[arg(required = true)]
    values: Vec<i64>,

    /// Dump the twin-tree link tables before converting.
    #[arg(short, long)]
    tables: bool,

    /// Log level.
    #[arg(long, default_value = "info")]
    log: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::info!("input is Baxter: {}", is_baxter_seq(&args.values));

    let twin = TwinTree::from_perm(&args.values)?;
    if args.tables {
        print!("{}", twin.dump_table());
    }

    let baxters = twin.into_baxters();
    let images: Vec<String> = baxters.iter().map(i64::to_string).collect();
    println!("{}", images.join(" "));
    log::info!("output is Baxter: {}", is_baxter_seq(&baxters));

    Ok(())
}
