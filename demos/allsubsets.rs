//! Enumerates every k-subset of `{0, .., n-1}` in revolving-door order.

use baxter_rs::combgen::CombinationsGen;
use baxter_rs::counts::binomial;
use clap::Parser;

#[derive(Parser)]
struct Args {
    /// Set size.
    #[arg(short, long, default_value_t = 5)]
    n: usize,

    /// Subset size.
    #[arg(short, long, default_value_t = 2)]
    k: usize,

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

    let mut gen = CombinationsGen::new(args.n, args.k);
    let mut total = 0u64;
    loop {
        let elems: Vec<String> = gen.current().iter().map(usize::to_string).collect();
        println!("{}", elems.join(" "));
        total += 1;
        gen.advance();
        if !gen.continuing() {
            break;
        }
    }

    log::info!(
        "{} subsets (expected {})",
        total,
        binomial(args.n as u64, args.k as u64)
    );
    Ok(())
}
