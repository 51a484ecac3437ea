//! разбор файлов UCD (Unicode Character Database)
//!
//! формат большинства файлов: `XXXX..YYYY ; поле ; поле # комментарий`. значения по умолчанию задаются
//! строками `# @missing: 0000..10FFFF; значение`, более поздние уточняют более ранние

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use thiserror::Error;
use unicode_toolkit::DataError;

pub use casing::CaseMappings;
pub use unicode_data::{Codepoint, UnicodeData};

mod casing;
mod unicode_data;

pub const UNICODE_DATA: &str = "UnicodeData.txt";
pub const PROP_LIST: &str = "PropList.txt";
pub const DERIVED_CORE_PROPERTIES: &str = "DerivedCoreProperties.txt";
pub const DERIVED_NORMALIZATION_PROPS: &str = "DerivedNormalizationProps.txt";
pub const SPECIAL_CASING: &str = "SpecialCasing.txt";
pub const CASE_FOLDING: &str = "CaseFolding.txt";
pub const SCRIPTS: &str = "Scripts.txt";
pub const SCRIPT_EXTENSIONS: &str = "ScriptExtensions.txt";
pub const EAST_ASIAN_WIDTH: &str = "EastAsianWidth.txt";
pub const LINE_BREAK: &str = "LineBreak.txt";
pub const HANGUL_SYLLABLE_TYPE: &str = "HangulSyllableType.txt";
pub const INDIC_SYLLABIC_CATEGORY: &str = "IndicSyllabicCategory.txt";
pub const BIDI_CLASS: &str = "extracted/DerivedBidiClass.txt";
pub const JOINING_TYPE: &str = "extracted/DerivedJoiningType.txt";
pub const GRAPHEME_BREAK: &str = "auxiliary/GraphemeBreakProperty.txt";
pub const WORD_BREAK: &str = "auxiliary/WordBreakProperty.txt";
pub const SENTENCE_BREAK: &str = "auxiliary/SentenceBreakProperty.txt";
pub const EMOJI_DATA: &str = "emoji/emoji-data.txt";

/// ошибка чтения UCD или записи таблиц
#[derive(Debug, Error)]
pub enum UcdError
{
    #[error("{}: {source}", path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{file}, строка {line}: {message}")]
    Parse
    {
        file: String,
        line: usize,
        message: String,
    },
    #[error("{file}: неизвестное значение {value}")]
    UnknownValue
    {
        file: String,
        value: String,
    },
    #[error("{0}")]
    Inconsistent(String),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// строка файла UCD: диапазон кодпоинтов и остальные поля без пробелов по краям
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry
{
    pub range: RangeInclusive<u32>,
    pub fields: Vec<String>,
}

impl Entry
{
    /// поле по номеру (0 - первое после диапазона)
    pub fn field(&self, index: usize) -> &str
    {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }
}

/// разобранный файл
#[derive(Debug, Clone, Default)]
pub struct UcdFile
{
    pub name: String,
    /// строки @missing в порядке следования
    pub missing: Vec<Entry>,
    pub entries: Vec<Entry>,
}

impl UcdFile
{
    pub fn parse(name: &str, source: &str) -> Result<Self, UcdError>
    {
        let mut file = Self {
            name: name.to_owned(),
            ..Default::default()
        };

        for (number, line) in source.lines().enumerate() {
            let error = || UcdError::Parse {
                file: name.to_owned(),
                line: number + 1,
                message: format!("некорректная строка: {}", line),
            };

            if let Some(missing) = line.strip_prefix("# @missing:") {
                file.missing.push(parse_entry(missing).ok_or_else(error)?);
                continue;
            }

            let data = match line.split_once('#') {
                Some((data, _)) => data,
                None => line,
            };

            if data.trim().is_empty() {
                continue;
            }

            file.entries.push(parse_entry(data).ok_or_else(error)?);
        }

        Ok(file)
    }

    /// значения перечислимого свойства из поля field: сначала @missing, затем записи.
    /// value переводит имя значения в число
    pub fn fill_enum<F>(&self, field: usize, values: &mut [u32], value: F) -> Result<(), UcdError>
    where
        F: Fn(&str) -> Option<u32>,
    {
        for entry in self.missing.iter().chain(self.entries.iter()) {
            let name = entry.field(field);

            let value = value(name).ok_or_else(|| UcdError::UnknownValue {
                file: self.name.clone(),
                value: name.to_owned(),
            })?;

            for code in entry.range.clone() {
                if let Some(slot) = values.get_mut(code as usize) {
                    *slot = value;
                }
            }
        }

        Ok(())
    }

    /// кодпоинты, у которых первое поле - имя двоичного свойства property
    pub fn fill_binary(&self, property: &str, flags: &mut [bool]) -> usize
    {
        self.fill_where(&[property], flags)
    }

    /// кодпоинты, у которых первые поля совпадают с fields (например, "NFC_QC", "M")
    pub fn fill_where(&self, fields: &[&str], flags: &mut [bool]) -> usize
    {
        let mut count = 0;

        for entry in self.entries.iter() {
            if fields.iter().enumerate().any(|(i, f)| entry.field(i) != *f) {
                continue;
            }

            for code in entry.range.clone() {
                if let Some(flag) = flags.get_mut(code as usize) {
                    *flag = true;
                    count += 1;
                }
            }
        }

        count
    }
}

/// "XXXX" или "XXXX..YYYY"
pub fn parse_range(source: &str) -> Option<RangeInclusive<u32>>
{
    let source = source.trim();

    match source.split_once("..") {
        Some((from, to)) => Some(parse_code(from)? ..= parse_code(to)?),
        None => {
            let code = parse_code(source)?;
            Some(code ..= code)
        }
    }
}

pub fn parse_code(source: &str) -> Option<u32>
{
    u32::from_str_radix(source.trim(), 16).ok()
}

/// последовательность кодпоинтов через пробел
pub fn parse_codes(source: &str) -> Option<Vec<u32>>
{
    source.split_whitespace().map(parse_code).collect()
}

fn parse_entry(line: &str) -> Option<Entry>
{
    let mut fields = line.split(';');
    let range = parse_range(fields.next()?)?;

    Some(Entry {
        range,
        fields: fields.map(|f| f.trim().to_owned()).collect(),
    })
}

/// каталог распакованного UCD.zip
#[derive(Debug, Clone)]
pub struct Ucd
{
    root: PathBuf,
}

impl Ucd
{
    pub fn new(root: impl Into<PathBuf>) -> Self
    {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path
    {
        &self.root
    }

    pub fn read(&self, name: &str) -> Result<String, UcdError>
    {
        let path = self.root.join(name);

        fs::read_to_string(&path).map_err(|source| UcdError::Io { path, source })
    }

    pub fn file(&self, name: &str) -> Result<UcdFile, UcdError>
    {
        UcdFile::parse(name, &self.read(name)?)
    }

    pub fn unicode_data(&self) -> Result<UnicodeData, UcdError>
    {
        UnicodeData::parse(&self.read(UNICODE_DATA)?)
    }

    pub fn case_mappings(&self, unicode_data: &UnicodeData) -> Result<CaseMappings, UcdError>
    {
        CaseMappings::new(unicode_data, &self.file(SPECIAL_CASING)?, &self.file(CASE_FOLDING)?)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const LINE_BREAK_SAMPLE: &str = "\
# LineBreak-14.0.0.txt
# @missing: 0000..10FFFF; XX
0000..0008;CM     # Cc     [9] <control-0000>..<control-0008>
0009;BA           # Cc         <control-0009>

0041..005A;AL     # L&    [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
# @missing: 3400..4DBF; ID
";

    #[test]
    fn entries()
    {
        let file = UcdFile::parse("LineBreak.txt", LINE_BREAK_SAMPLE).unwrap();

        assert_eq!(file.missing.len(), 2);
        assert_eq!(file.entries.len(), 3);
        assert_eq!(file.entries[0].range, 0 ..= 8);
        assert_eq!(file.entries[1].field(0), "BA");
        assert_eq!(file.entries[1].field(5), "");
        assert_eq!(file.missing[1].range, 0x3400 ..= 0x4DBF);
    }

    #[test]
    fn missing_values()
    {
        let file = UcdFile::parse("LineBreak.txt", LINE_BREAK_SAMPLE).unwrap();
        let mut values = vec![u32::MAX; 0x110000];

        let names = |name: &str| match name {
            "XX" => Some(0),
            "AL" => Some(2),
            "BA" => Some(4),
            "CM" => Some(9),
            "ID" => Some(14),
            _ => None,
        };

        file.fill_enum(0, &mut values, names).unwrap();

        assert_eq!(values[0x5], 9);
        assert_eq!(values[0x9], 4);
        assert_eq!(values[0x42], 2);
        assert_eq!(values[0x3400], 14);
        assert_eq!(values[0x10FFFF], 0);

        let error = file.fill_enum(0, &mut values, |_| None).unwrap_err();
        assert!(matches!(error, UcdError::UnknownValue { .. }));
    }

    #[test]
    fn binary()
    {
        let source = "\
0009..000D    ; White_Space # Cc   [5] <control-0009>..<control-000D>
0020          ; White_Space # Zs       SPACE
0030..0039    ; ASCII_Hex_Digit # Nd  [10] DIGIT ZERO..DIGIT NINE
00A0          ; NFKC_QC; N                   # Zs       NO-BREAK SPACE
0300..0304    ; NFC_QC; M                    # Mn   [5] COMBINING GRAVE ACCENT..COMBINING MACRON
";
        let file = UcdFile::parse("PropList.txt", source).unwrap();
        let mut flags = vec![false; 0x110000];

        assert_eq!(file.fill_binary("White_Space", &mut flags), 6);
        assert!(flags[0x20] && flags[0xD] && !flags[0x30]);

        let mut maybe = vec![false; 0x110000];
        assert_eq!(file.fill_where(&["NFC_QC", "M"], &mut maybe), 5);
        assert!(maybe[0x301] && !maybe[0xA0]);
    }

    #[test]
    fn malformed()
    {
        assert!(UcdFile::parse("x.txt", "00ZZ; AL\n").is_err());
        assert!(UcdFile::parse("x.txt", "# @missing: nothing\n").is_err());

        assert_eq!(parse_range(" 1F600..1F64F "), Some(0x1F600 ..= 0x1F64F));
        assert_eq!(parse_codes("0041 0301"), Some(vec![0x41, 0x301]));
        assert_eq!(parse_codes(""), Some(vec![]));
    }

    #[test]
    fn missing_file()
    {
        let dir = tempfile::tempdir().unwrap();
        let error = Ucd::new(dir.path()).file(LINE_BREAK).unwrap_err();

        assert!(matches!(error, UcdError::Io { .. }));
    }
}
