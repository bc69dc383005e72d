//! Enumerates every balanced sequence of n bracket pairs, optionally with
//! the search tree each sequence encodes.

use baxter_rs::bracegen::BracesGen;
use baxter_rs::counts::catalan;
use baxter_rs::tabtree::read_bst_braced;
use clap::Parser;

#[derive(Parser)]
struct Args {
    /// Number of bracket pairs.
    #[arg(short, long, default_value_t = 3)]
    pairs: usize,

    /// Also dump the edge list of the tree behind each sequence.
    #[arg(short, long)]
    trees: bool,

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

    let mut gen = BracesGen::new(args.pairs);
    let mut total = 0u64;
    loop {
        println!("{}", gen.current());
        if args.trees {
            let tree = read_bst_braced(gen.current(), args.pairs, false)?;
            print!("{}", tree.dump_edge_list());
        }
        total += 1;
        gen.advance();
        if !gen.continuing() {
            break;
        }
    }

    log::info!("{} sequences (expected {})", total, catalan(args.pairs as u64));
    Ok(())
}
