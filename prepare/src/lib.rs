//! экспорт запечённых данных для FsDataProvider и BlobDataProvider, построение таблиц data/ из UCD

use std::fs::File;
use std::io::BufWriter;

use log::info;
use unicode_toolkit::provider::{export, BakedProvider, BlobExporter, ExportStats, FilesystemExporter};
use unicode_toolkit::{DataError, DataErrorKind};

pub use cli::{Cli, Format, TablesCli};

pub mod cli;
pub mod encode;
pub mod output;
pub mod stats;
pub mod tables;
pub mod ucd;

/// экспорт по параметрам командной строки
pub fn run(cli: &Cli) -> Result<ExportStats, DataError>
{
    let options = cli.export_options();

    info!("экспорт в {} ({:?})", cli.out.display(), cli.format);

    match cli.format {
        Format::Fs => {
            let mut exporter = FilesystemExporter::try_new(&cli.out, cli.overwrite)?;
            export(&BakedProvider, &mut exporter, &options)
        }
        Format::Blob => {
            if cli.out.exists() && !cli.overwrite {
                return Err(DataErrorKind::InvalidRequest
                    .into_error()
                    .with_context(format!("файл уже существует: {}", cli.out.display())));
            }

            let mut exporter = BlobExporter::new(BufWriter::new(File::create(&cli.out)?));
            export(&BakedProvider, &mut exporter, &options)
        }
    }
}
