//! Enumerates every permutation of `[1, n]` in lexicographic order.

use baxter_rs::counts::factorial;
use baxter_rs::domain::{Domain, Elt};
use baxter_rs::permgen::PermutationsGen;
use clap::Parser;

#[derive(Parser)]
struct Args {
    /// Domain size.
    #[arg(short, long, default_value_t = 4)]
    size: i64,

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

    let dom = Domain::new(args.size);
    let mut gen = PermutationsGen::new(&dom);
    let mut total = 0u64;
    loop {
        let images: Vec<String> = gen.current().iter().map(Elt::to_string).collect();
        println!("{}", images.join(" "));
        total += 1;
        gen.advance();
        if !gen.continuing() {
            break;
        }
    }

    log::info!("{} permutations (expected {})", total, factorial(args.size as u64));
    Ok(())
}
