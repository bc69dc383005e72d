//! Draws a random permutation and prints it in both explicit and loop form.

use baxter_rs::dice::Dice;
use baxter_rs::domain::Domain;
use baxter_rs::perm::{create_loops, Permutation};
use clap::Parser;

#[derive(Parser)]
struct Args {
    /// Domain size.
    #[arg(short, long, default_value_t = 8)]
    size: i64,

    /// RNG seed; a fresh one is drawn and reported when omitted.
    #[arg(long)]
    seed: Option<u64>,

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

    let mut dice = Dice::new();
    let seed = dice.init(args.seed);
    log::info!("seed = {}", seed);

    let dom = Domain::new(args.size);
    let mut table: Vec<_> = dom.values().collect();
    dice.shuffle(&mut table)?;

    let perm = Permutation::from_loops(dom, create_loops(&dom, &table));
    println!("{}", perm.to_perm_string());
    println!("{}", perm);

    let mut inv = perm.clone();
    inv.inverse();
    println!("inverse: {}", inv);

    Ok(())
}
