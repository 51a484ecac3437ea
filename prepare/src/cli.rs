use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};
use unicode_toolkit::provider::ExportOptions;
use unicode_toolkit::DataLocale;

/// экспорт запечённых данных в каталог или blob
#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub struct Cli
{
    /// формат результата
    #[clap(long, value_enum, default_value_t = Format::Fs)]
    pub format: Format,

    /// каталог (fs) или файл (blob)
    #[clap(long, value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub out: PathBuf,

    /// префиксы путей маркеров, например props/ или segmenter/dictionary
    #[clap(long, num_args = 1..)]
    pub markers: Vec<String>,

    /// локали через запятую; без параметра - все доступные
    #[clap(long, value_delimiter = ',')]
    pub locales: Option<Vec<DataLocale>>,

    /// перезаписать существующий результат
    #[clap(long)]
    pub overwrite: bool,

    #[clap(short, long)]
    pub verbose: bool,
}

/// построение таблиц data/ из распакованного UCD.zip
#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub struct TablesCli
{
    /// каталог UCD (UnicodeData.txt, extracted/, auxiliary/, emoji/)
    #[clap(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub ucd: PathBuf,

    /// каталог таблиц
    #[clap(long, value_name = "DIR", value_hint = ValueHint::DirPath, default_value = "data")]
    pub out: PathBuf,

    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format
{
    /// дерево каталогов для FsDataProvider
    #[default]
    Fs,
    /// один файл для BlobDataProvider
    Blob,
}

impl Cli
{
    pub fn export_options(&self) -> ExportOptions
    {
        ExportOptions {
            markers: self.markers.clone(),
            locales: self.locales.clone(),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn arguments()
    {
        let cli = Cli::parse_from(["prepare", "--out", "data", "--markers", "props/", "segmenter/", "--locales", "cs,sv"]);

        assert_eq!(cli.format, Format::Fs);
        assert_eq!(cli.out, PathBuf::from("data"));
        assert!(!cli.overwrite);

        let options = cli.export_options();
        assert_eq!(options.markers, vec!["props/", "segmenter/"]);
        assert_eq!(
            options.locales,
            Some(vec!["cs".parse().unwrap(), "sv".parse().unwrap()])
        );

        let cli = Cli::parse_from(["prepare", "--format", "blob", "--out", "data.postcard", "--overwrite"]);
        assert_eq!(cli.format, Format::Blob);
        assert!(cli.overwrite);
        assert!(cli.export_options().locales.is_none());

        assert!(Cli::try_parse_from(["prepare", "--out", "x", "--locales", "not a locale"]).is_err());
        assert!(Cli::try_parse_from(["prepare"]).is_err());
    }

    #[test]
    fn tables_arguments()
    {
        let cli = TablesCli::parse_from(["tables", "--ucd", "/tmp/ucd"]);
        assert_eq!(cli.ucd, PathBuf::from("/tmp/ucd"));
        assert_eq!(cli.out, PathBuf::from("data"));
        assert!(!cli.verbose);

        let cli = TablesCli::parse_from(["tables", "--ucd", "ucd", "--out", "tables", "-v"]);
        assert_eq!(cli.out, PathBuf::from("tables"));
        assert!(cli.verbose);

        assert!(TablesCli::try_parse_from(["tables"]).is_err());
    }
}
