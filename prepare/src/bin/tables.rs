use clap::Parser;
use log::{error, info, LevelFilter};
use unicode_toolkit::logger;
use unicode_toolkit_prepare::tables::generate;
use unicode_toolkit_prepare::ucd::Ucd;
use unicode_toolkit_prepare::TablesCli;

fn main()
{
    let cli = TablesCli::parse();

    logger::init_with_level(match cli.verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    });

    match generate(&Ucd::new(&cli.ucd), &cli.out) {
        Ok(output) => {
            let total: usize = output.written().iter().map(|(_, size)| size).sum();
            info!("{}: {} файлов, {} байт", output.root().display(), output.written().len(), total);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
