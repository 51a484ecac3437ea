use clap::Parser;
use log::{error, LevelFilter};
use unicode_toolkit::logger;
use unicode_toolkit::provider::BakedProvider;
use unicode_toolkit_prepare::{run, stats, Cli};

fn main()
{
    let cli = Cli::parse();

    logger::init_with_level(match cli.verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    });

    let result = run(&cli).and_then(|export| {
        stats::print_export(&export);
        stats::print_normalizer(&BakedProvider)
    });

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
