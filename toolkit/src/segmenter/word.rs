//! границы слов (UAX #29, правила WB). участки письменностей без пробелов между словами
//! разбиваются словарём или LSTM-моделью

use std::ops::Range;

use crate::error::DataError;
use crate::properties::{CodePointMapData8, LineBreak, WordBreak};
use crate::provider::{DataLocale, DataProvider};
use crate::text::{Latin1Chars, Utf16Chars, Utf8Chars};

use super::complex::{ComplexLanguage, ComplexPayloads};
use super::grapheme::{GraphemeClass, GraphemeClusterSegmenter};
use super::iterator::{BreakIterator, BreakRules, Text};

/// итератор границ слов
pub type WordBreakIterator<'l> = BreakIterator<WordRules<'l>>;

/// способ разбиения письменностей без пробелов между словами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordSegmenterMode
{
    /// LSTM-модель, если есть, иначе словарь
    #[default]
    Auto,
    Dictionary,
    /// LSTM для юго-восточной Азии, словарь для китайского и японского
    Lstm,
}

/// настройки сегментатора слов
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordBreakOptions
{
    /// язык текста: для fi и sv двоеточие не разделяет слова
    pub content_locale: Option<DataLocale>,
}

/// тип сегмента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordType
{
    /// пробелы, знаки препинания
    #[default]
    None,
    Number,
    /// буквы, слоги, иероглифы
    Letter,
}

impl WordType
{
    pub fn is_word_like(&self) -> bool
    {
        *self != WordType::None
    }
}

/// сегментатор слов
#[derive(Debug, Clone, PartialEq)]
pub struct WordSegmenter
{
    grapheme: GraphemeClusterSegmenter,
    wb: CodePointMapData8,
    lb: CodePointMapData8,
    complex: ComplexPayloads,
    /// двоеточие - MidLetter
    colon_mid_letter: bool,
}

impl WordSegmenter
{
    pub fn try_new<P: DataProvider + ?Sized>(
        provider: &P,
        mode: WordSegmenterMode,
        options: WordBreakOptions,
    ) -> Result<Self, DataError>
    {
        let colon_mid_letter = options
            .content_locale
            .as_ref()
            .and_then(|locale| locale.language())
            .map_or(false, |language| matches!(language, "fi" | "sv"));

        Ok(Self {
            grapheme: GraphemeClusterSegmenter::try_new(provider)?,
            wb: CodePointMapData8::load_word_break(provider)?,
            lb: CodePointMapData8::load_line_break(provider)?,
            complex: ComplexPayloads::try_new(provider, mode)?,
            colon_mid_letter,
        })
    }

    pub fn try_new_auto<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Self::try_new(provider, WordSegmenterMode::Auto, WordBreakOptions::default())
    }

    pub fn try_new_dictionary<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Self::try_new(provider, WordSegmenterMode::Dictionary, WordBreakOptions::default())
    }

    pub fn try_new_lstm<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Self::try_new(provider, WordSegmenterMode::Lstm, WordBreakOptions::default())
    }

    pub fn segment_str(&self, input: &str) -> WordBreakIterator<'_>
    {
        BreakIterator::new(Utf8Chars::new(input.as_bytes()), self.rules())
    }

    /// UTF-8, возможно некорректный
    pub fn segment_utf8(&self, input: &[u8]) -> WordBreakIterator<'_>
    {
        BreakIterator::new(Utf8Chars::new(input), self.rules())
    }

    pub fn segment_utf16(&self, input: &[u16]) -> WordBreakIterator<'_>
    {
        BreakIterator::new(Utf16Chars::new(input), self.rules())
    }

    pub fn segment_latin1(&self, input: &[u8]) -> WordBreakIterator<'_>
    {
        BreakIterator::new(Latin1Chars::new(input), self.rules())
    }

    fn rules(&self) -> WordRules<'_>
    {
        WordRules {
            segmenter: self,
            last: WordBreak::Other,
            before_last: WordBreak::Other,
            regional_indicators: 0,
            run: 0 .. 0,
            run_breaks: vec![],
        }
    }

    fn classify(&self, c: char) -> WordClass
    {
        let grapheme = self.grapheme.classify(c);
        let mut wb = WordBreak(self.wb.get_char(c));

        // двоеточия разделяют слова, кроме финского и шведского
        if wb == WordBreak::MidLetter && matches!(c, ':' | '\u{FE55}' | '\u{FF1A}') && !self.colon_mid_letter {
            wb = WordBreak::Other;
        }

        let lb = LineBreak(self.lb.get_char(c));
        let pictographic = grapheme.is_pictographic();

        let complex = match lb {
            LineBreak::ComplexContext => Some(ComplexLanguage::from_south_east_asian(c as u32)),
            LineBreak::Ideographic | LineBreak::ConditionalJapaneseStarter
                if !pictographic && matches!(wb, WordBreak::Other | WordBreak::Katakana) =>
            {
                Some(ComplexLanguage::Cj)
            }
            _ => None,
        };

        WordClass {
            ch: c,
            wb,
            pictographic,
            complex,
            grapheme,
        }
    }
}

/// свойства символа для правил WB
#[derive(Debug, Clone, Copy)]
pub struct WordClass
{
    ch: char,
    wb: WordBreak,
    pictographic: bool,
    /// символ письменности без пробелов между словами
    complex: Option<ComplexLanguage>,
    grapheme: GraphemeClass,
}

impl WordClass
{
    /// игнорируется правилом WB4
    #[inline]
    fn is_ignorable(&self) -> bool
    {
        matches!(self.wb, WordBreak::Extend | WordBreak::Format | WordBreak::ZWJ)
    }

    #[inline]
    fn is_newline(&self) -> bool
    {
        matches!(self.wb, WordBreak::Newline | WordBreak::CR | WordBreak::LF)
    }

    #[inline]
    fn is_letter(&self) -> bool
    {
        matches!(self.wb, WordBreak::ALetter | WordBreak::HebrewLetter | WordBreak::Katakana) || self.complex.is_some()
    }
}

#[inline]
fn is_ah_letter(wb: WordBreak) -> bool
{
    matches!(wb, WordBreak::ALetter | WordBreak::HebrewLetter)
}

#[inline]
fn is_mid_letter_q(wb: WordBreak) -> bool
{
    matches!(wb, WordBreak::MidLetter | WordBreak::MidNumLet | WordBreak::SingleQuote)
}

#[inline]
fn is_mid_num_q(wb: WordBreak) -> bool
{
    matches!(wb, WordBreak::MidNum | WordBreak::MidNumLet | WordBreak::SingleQuote)
}

/// правила WB
#[derive(Debug)]
pub struct WordRules<'l>
{
    segmenter: &'l WordSegmenter,
    /// последний символ, не пропущенный по WB4
    last: WordBreak,
    before_last: WordBreak,
    regional_indicators: usize,
    /// текущий участок письменности без пробелов и границы внутри него
    run: Range<usize>,
    run_breaks: Vec<usize>,
}

impl<'l> WordRules<'l>
{
    fn start(&mut self, first: WordClass)
    {
        self.last = first.wb;
        self.before_last = WordBreak::Other;
        self.regional_indicators = match first.wb {
            WordBreak::RegionalIndicator => 1,
            _ => 0,
        };
    }

    fn advance(&mut self, prev: WordClass, cur: WordClass)
    {
        if cur.is_ignorable() && !prev.is_newline() {
            return;
        }

        self.before_last = self.last;
        self.last = cur.wb;
        self.regional_indicators = match cur.wb {
            WordBreak::RegionalIndicator => self.regional_indicators + 1,
            _ => 0,
        };
    }

    /// граница внутри участка письменности без пробелов; None - символ i не внутри участка
    fn complex_break(&mut self, text: &Text<WordClass>, i: usize) -> Option<bool>
    {
        let start = i - 1;

        if start >= self.run.end {
            if let Some(language) = text.classes[start].complex {
                self.compute_run(text, start, language);
            }
        }

        match self.run.start < i && i < self.run.end {
            true => Some(self.run_breaks.binary_search(&i).is_ok()),
            false => None,
        }
    }

    fn compute_run(&mut self, text: &Text<WordClass>, start: usize, language: ComplexLanguage)
    {
        let classes = &text.classes;
        let mut end = start + 1;

        while end < classes.len() && (classes[end].complex == Some(language) || classes[end].is_ignorable()) {
            end += 1;
        }

        let chars: Vec<char> = classes[start .. end].iter().map(|c| c.ch).collect();
        let graphemes: Vec<GraphemeClass> = classes[start .. end].iter().map(|c| c.grapheme).collect();

        self.run = start .. end;
        self.run_breaks = self
            .segmenter
            .complex
            .segment(language, &chars, &graphemes)
            .into_iter()
            .map(|i| start + i)
            .collect();
    }

    /// ближайший после i символ, не пропускаемый по WB4
    fn next_significant(text: &Text<WordClass>, i: usize) -> Option<WordBreak>
    {
        text.classes
            .get(i + 1 ..)?
            .iter()
            .find(|c| !c.is_ignorable())
            .map(|c| c.wb)
    }

    fn decide(&mut self, text: &Text<WordClass>, i: usize, prev: WordClass, cur: WordClass) -> bool
    {
        use WordBreak as W;

        if let Some(result) = self.complex_break(text, i) {
            return result;
        }

        match (prev.wb, cur.wb) {
            // WB3
            (W::CR, W::LF) => return false,
            // WB3a, WB3b
            _ if prev.is_newline() || cur.is_newline() => return true,
            // WB3c
            (W::ZWJ, _) if cur.pictographic => return false,
            // WB3d
            (W::WSegSpace, W::WSegSpace) => return false,
            // WB4
            _ if cur.is_ignorable() => return false,
            _ => (),
        }

        let (last, before_last) = (self.last, self.before_last);
        let next = || Self::next_significant(text, i);

        match (last, cur.wb) {
            // WB5
            (l, c) if is_ah_letter(l) && is_ah_letter(c) => false,
            // WB6
            (l, c) if is_ah_letter(l) && is_mid_letter_q(c) && next().map_or(false, is_ah_letter) => false,
            // WB7
            (l, c) if is_ah_letter(before_last) && is_mid_letter_q(l) && is_ah_letter(c) => false,
            // WB7a
            (W::HebrewLetter, W::SingleQuote) => false,
            // WB7b
            (W::HebrewLetter, W::DoubleQuote) if next() == Some(W::HebrewLetter) => false,
            // WB7c
            (W::DoubleQuote, W::HebrewLetter) if before_last == W::HebrewLetter => false,
            // WB8, WB9, WB10
            (W::Numeric, W::Numeric) => false,
            (l, W::Numeric) if is_ah_letter(l) => false,
            (W::Numeric, c) if is_ah_letter(c) => false,
            // WB11
            (l, W::Numeric) if before_last == W::Numeric && is_mid_num_q(l) => false,
            // WB12
            (W::Numeric, c) if is_mid_num_q(c) && next() == Some(W::Numeric) => false,
            // WB13
            (W::Katakana, W::Katakana) => false,
            // WB13a
            (l, W::ExtendNumLet) if is_ah_letter(l) || matches!(l, W::Numeric | W::Katakana | W::ExtendNumLet) => {
                false
            }
            // WB13b
            (W::ExtendNumLet, c) if is_ah_letter(c) || matches!(c, W::Numeric | W::Katakana) => false,
            // WB15, WB16
            (W::RegionalIndicator, W::RegionalIndicator) => self.regional_indicators % 2 == 0,
            // WB999
            _ => true,
        }
    }
}

impl<'l> BreakRules for WordRules<'l>
{
    type Class = WordClass;

    fn classify(&self, c: char) -> WordClass
    {
        self.segmenter.classify(c)
    }

    fn is_break(&mut self, text: &Text<WordClass>, i: usize) -> bool
    {
        let (prev, cur) = (text.classes[i - 1], text.classes[i]);

        if i == 1 {
            self.start(prev);
        }

        let result = self.decide(text, i, prev, cur);
        self.advance(prev, cur);

        result
    }
}

impl<'l> WordBreakIterator<'l>
{
    /// тип сегмента, заканчивающегося последней выданной границей
    pub fn word_type(&self) -> WordType
    {
        let segment = self.last_segment();

        match segment.iter().any(|c| c.is_letter()) {
            true => WordType::Letter,
            false => match segment.iter().any(|c| c.wb == WordBreak::Numeric) {
                true => WordType::Number,
                false => WordType::None,
            },
        }
    }

    pub fn is_word_like(&self) -> bool
    {
        self.word_type().is_word_like()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::provider::markers::LstmV1;
    use crate::provider::{
        AnyPayload, BakedProvider, DataMarker, DataMarkerInfo, DataRequest, DataResponse, EmptyDataProvider,
    };
    use crate::segmenter::complex::test_model;
    use crate::DataErrorKind;

    /// границы сегментов заданной длины
    fn offsets(pieces: &[&str]) -> Vec<usize>
    {
        let mut result = vec![0];
        pieces.iter().fold(0, |offset, piece| {
            result.push(offset + piece.len());
            offset + piece.len()
        });

        result
    }

    fn breaks(input: &str) -> Vec<usize>
    {
        WordSegmenter::try_new_auto(&BakedProvider)
            .unwrap()
            .segment_str(input)
            .collect()
    }

    #[test]
    fn words()
    {
        let pieces = [
            "The", " ", "quick", " ", "(", "“", "brown", "”", ")", " ", "fox", " ", "can’t", " ", "jump", " ", "32.3",
            " ", "feet", ",", " ", "right", "?",
        ];
        assert_eq!(breaks(&pieces.concat()), offsets(&pieces));

        assert_eq!(breaks("a  b"), vec![0, 1, 3, 4]);
        assert_eq!(breaks("a\r\nb"), vec![0, 1, 3, 4]);
        assert_eq!(breaks("e\u{301}f x"), vec![0, 4, 5, 6]);
        assert_eq!(breaks("foo_bar 3a"), vec![0, 7, 8, 10]);
        assert_eq!(breaks("カタカナ"), vec![0, 12]);
        assert_eq!(breaks(""), vec![0]);
    }

    #[test]
    fn emoji()
    {
        assert_eq!(breaks("👨\u{200D}👩\u{200D}👧 a"), vec![0, 18, 19, 20]);
        assert_eq!(breaks("🇺🇸🇫🇷"), vec![0, 8, 16]);
        // ZWJ перед пиктограммой без эмодзи-представления
        assert_eq!(breaks("a\u{200D}\u{2605}"), vec![0, 7]);
    }

    #[test]
    fn colon()
    {
        assert_eq!(breaks("a:b"), vec![0, 1, 2, 3]);

        let options = WordBreakOptions {
            content_locale: Some("sv".parse().unwrap()),
        };
        let segmenter = WordSegmenter::try_new(&BakedProvider, WordSegmenterMode::Auto, options).unwrap();
        assert_eq!(segmenter.segment_str("a:b").collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn dictionary()
    {
        let segmenter = WordSegmenter::try_new_dictionary(&BakedProvider).unwrap();
        let text = "ภาษาไทยภาษาไทย";

        assert_eq!(segmenter.segment_str(text).collect::<Vec<_>>(), vec![0, 12, 21, 33, 42]);

        let utf16: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(segmenter.segment_utf16(&utf16).collect::<Vec<_>>(), vec![0, 4, 7, 11, 14]);

        assert_eq!(segmenter.segment_str("你好世界").collect::<Vec<_>>(), vec![0, 6, 12]);
        assert_eq!(segmenter.segment_str("日本語です").collect::<Vec<_>>(), vec![0, 9, 15]);

        let pieces = ["Hello", " ", "ภาษา", "ไทย", "!"];
        assert_eq!(segmenter.segment_str(&pieces.concat()).collect::<Vec<_>>(), offsets(&pieces));
    }

    #[test]
    fn word_types()
    {
        let segmenter = WordSegmenter::try_new_auto(&BakedProvider).unwrap();
        let mut iter = segmenter.segment_str("Hello 42 ภาษา.");

        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.word_type(), WordType::None);

        let expected = [
            (5, WordType::Letter),
            (6, WordType::None),
            (8, WordType::Number),
            (9, WordType::None),
            (21, WordType::Letter),
            (22, WordType::None),
        ];

        for (offset, word_type) in expected {
            assert_eq!(iter.next(), Some(offset));
            assert_eq!(iter.word_type(), word_type);
            assert_eq!(iter.is_word_like(), word_type.is_word_like());
        }

        assert_eq!(iter.next(), None);
    }

    /// запечённые данные + тестовая LSTM-модель для тайского
    struct LstmProvider;

    impl DataProvider for LstmProvider
    {
        fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
        {
            match marker == LstmV1::INFO && req.attributes == "Thai_graphclust_model4_heavy" {
                true => Ok(DataResponse::new(AnyPayload::from_struct(test_model()))),
                false => BakedProvider.load_data(marker, req),
            }
        }
    }

    #[test]
    fn lstm()
    {
        for segmenter in [
            WordSegmenter::try_new_lstm(&LstmProvider).unwrap(),
            WordSegmenter::try_new_auto(&LstmProvider).unwrap(),
        ] {
            assert_eq!(segmenter.segment_str("กขคกขค").collect::<Vec<_>>(), vec![0, 9, 18]);
        }

        // в режиме словаря модель не используется
        let segmenter = WordSegmenter::try_new_dictionary(&LstmProvider).unwrap();
        assert_eq!(segmenter.segment_str("กขคกขค").collect::<Vec<_>>(), vec![0, 18]);

        // без данных для лаосского участок - один сегмент
        let segmenter = WordSegmenter::try_new_lstm(&LstmProvider).unwrap();
        assert_eq!(segmenter.segment_str("ສະບາຍດີ").collect::<Vec<_>>(), vec![0, 21]);
    }

    #[test]
    fn missing_data()
    {
        let error = WordSegmenter::try_new_auto(&EmptyDataProvider).unwrap_err();
        assert_eq!(error.kind, DataErrorKind::MarkerNotFound);
    }
}
