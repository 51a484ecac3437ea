use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::{parse_code, parse_codes, UcdError, UNICODE_DATA};

/// запись UnicodeData.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codepoint
{
    pub code: u32,
    pub gc: String,
    pub ccc: u8,
    pub bc: String,
    /// тег совместимой декомпозиции (<compat>, <font> ...), None - каноническая
    pub decomposition_tag: Option<String>,
    pub decomposition: Vec<u32>,
    pub bidi_mirrored: bool,
    pub simple_uppercase: Option<u32>,
    pub simple_lowercase: Option<u32>,
    pub simple_titlecase: Option<u32>,
}

impl Codepoint
{
    /// каноническая декомпозиция первого уровня
    pub fn canonical_decomposition(&self) -> Option<&[u32]>
    {
        match self.decomposition_tag.is_none() && !self.decomposition.is_empty() {
            true => Some(&self.decomposition),
            false => None,
        }
    }
}

/// UnicodeData.txt
///
/// блоки, заданные парами <..., First> / <..., Last> (хангыль, CJK, тангутский, Private Use, суррогаты),
/// хранятся диапазонами: у их кодпоинтов нет ни декомпозиций, ни регистров
#[derive(Debug, Clone, Default)]
pub struct UnicodeData
{
    pub codepoints: BTreeMap<u32, Codepoint>,
    pub ranges: Vec<(RangeInclusive<u32>, Codepoint)>,
}

impl UnicodeData
{
    pub fn parse(source: &str) -> Result<Self, UcdError>
    {
        let mut data = Self::default();

        // пригодится, когда встретим диапазоны
        let mut range_start: Option<Codepoint> = None;

        for (number, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let error = |message: &str| UcdError::Parse {
                file: UNICODE_DATA.to_owned(),
                line: number + 1,
                message: message.to_owned(),
            };

            let props: Vec<&str> = line.split(';').collect();

            if props.len() != 15 {
                return Err(error("ожидалось 15 полей"));
            }

            let code = parse_code(props[0]).ok_or_else(|| error("некорректный кодпоинт"))?;
            let name = props[1];

            let ccc = props[3].parse().map_err(|_| error("некорректный CCC"))?;

            // декомпозиция: "<tag> XXXX XXXX" или "XXXX XXXX"
            let (decomposition_tag, codes) = match props[5].strip_prefix('<') {
                Some(tagged) => {
                    let (tag, codes) = tagged.split_once('>').ok_or_else(|| error("некорректный тег декомпозиции"))?;
                    (Some(tag.to_owned()), codes)
                }
                None => (None, props[5]),
            };
            let decomposition = parse_codes(codes).ok_or_else(|| error("некорректная декомпозиция"))?;

            let case = |field: &str| match field.is_empty() {
                true => Ok(None),
                false => parse_code(field).map(Some).ok_or_else(|| error("некорректное отображение регистра")),
            };

            let codepoint = Codepoint {
                code,
                gc: props[2].to_owned(),
                ccc,
                bc: props[4].to_owned(),
                decomposition_tag,
                decomposition,
                bidi_mirrored: props[9] == "Y",
                simple_uppercase: case(props[12])?,
                simple_lowercase: case(props[13])?,
                simple_titlecase: case(props[14])?,
            };

            if name.starts_with('<') && name.ends_with(", First>") {
                range_start = Some(codepoint);
                continue;
            }

            if name.starts_with('<') && name.ends_with(", Last>") {
                let first = range_start.take().ok_or_else(|| error("Last без First"))?;
                data.ranges.push((first.code ..= code, first));
                continue;
            }

            data.codepoints.insert(code, codepoint);
        }

        match range_start {
            Some(first) => Err(UcdError::Inconsistent(format!(
                "{}: диапазон U+{:04X} не закрыт",
                UNICODE_DATA, first.code
            ))),
            None => Ok(data),
        }
    }

    /// запись кодпоинта, в том числе внутри диапазона
    pub fn get(&self, code: u32) -> Option<&Codepoint>
    {
        self.codepoints.get(&code).or_else(|| {
            self.ranges
                .iter()
                .find(|(range, _)| range.contains(&code))
                .map(|(_, codepoint)| codepoint)
        })
    }

    /// все кодпоинты с записями: отдельные строки и диапазоны, с общей записью для диапазона
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Codepoint)> + '_
    {
        self.codepoints.iter().map(|(&code, codepoint)| (code, codepoint)).chain(
            self.ranges
                .iter()
                .flat_map(|(range, codepoint)| range.clone().map(move |code| (code, codepoint))),
        )
    }

    pub fn ccc(&self, code: u32) -> u8
    {
        self.codepoints.get(&code).map(|c| c.ccc).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const SAMPLE: &str = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
00C5;LATIN CAPITAL LETTER A WITH RING ABOVE;Lu;0;L;0041 030A;;;;N;LATIN CAPITAL LETTER A RING;;;00E5;
00BD;VULGAR FRACTION ONE HALF;No;0;ON;<fraction> 0031 2044 0032;;;1/2;N;FRACTION ONE HALF;;;;
0028;LEFT PARENTHESIS;Ps;0;ON;;;;;Y;OPENING PARENTHESIS;;;;
030A;COMBINING RING ABOVE;Mn;230;NSM;;;;;N;NON-SPACING RING ABOVE;;;;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
";

    #[test]
    fn records()
    {
        let data = UnicodeData::parse(SAMPLE).unwrap();

        let a = data.get(0x41).unwrap();
        assert_eq!(a.gc, "Lu");
        assert_eq!(a.simple_lowercase, Some(0x61));
        assert_eq!(a.simple_uppercase, None);

        let ring = data.get(0xC5).unwrap();
        assert_eq!(ring.canonical_decomposition(), Some(&[0x41, 0x30A][..]));

        let half = data.get(0xBD).unwrap();
        assert_eq!(half.decomposition_tag.as_deref(), Some("fraction"));
        assert_eq!(half.decomposition, vec![0x31, 0x2044, 0x32]);
        assert_eq!(half.canonical_decomposition(), None);

        assert!(data.get(0x28).unwrap().bidi_mirrored);
        assert_eq!(data.ccc(0x30A), 230);
        assert_eq!(data.ccc(0x41), 0);
    }

    #[test]
    fn ranges()
    {
        let data = UnicodeData::parse(SAMPLE).unwrap();

        assert_eq!(data.ranges.len(), 1);
        assert_eq!(data.get(0xAC01).map(|c| c.gc.as_str()), Some("Lo"));
        assert!(data.get(0xD7A4).is_none());
        assert_eq!(data.iter().count(), 6 + 11172);
    }

    #[test]
    fn malformed()
    {
        assert!(UnicodeData::parse("0041;A;Lu;0;L\n").is_err());
        assert!(UnicodeData::parse("0041;A;Lu;x;L;;;;;N;;;;;\n").is_err());
        assert!(UnicodeData::parse("AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;\n").is_err());
    }
}
