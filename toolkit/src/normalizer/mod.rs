//! нормализация NFC / NFKC / NFD / NFKD
//!
//! текст разбивается на сегменты - последовательности, начинающиеся с кодпоинта, на котором нормализация
//! может начаться заново. каждый сегмент декомпозируется, упорядочивается канонически и (для NF(K)C)
//! комбинируется. некорректные последовательности заменяются на U+FFFD

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data;
use crate::error::DataError;
use crate::provider::markers::{CompositionsV1, NfdTablesV1, NfkdTablesV1};
use crate::provider::{load_singleton, DataProvider};
use crate::text::{CharSource, DecodedChar, Utf16Chars, Utf8Chars};

use codepoint::{canonical_order, Codepoint};
use composition::Composer;
use decomposition::Decomposer;

pub use properties::{CanonicalCombiningClassMap, CanonicalComposition};

mod codepoint;
mod composition;
mod decomposition;
mod properties;

/// раскладка значений в таблицах декомпозиции
pub mod format
{
    pub use super::decomposition::{
        BLOCK_BITS, CONTINUOUS_BLOCK_END, LAST_DECOMPOSING_CODEPOINT_BLOCK, MARKER_COMBINES_BACKWARDS,
        MARKER_EXPANSION, MARKER_NONSTARTER, MARKER_SINGLETON, MARKER_STARTER,
    };
}

/// таблицы декомпозиции
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionTables
{
    /// индекс блоков по 128 кодпоинтов
    pub index: Cow<'static, [u16]>,
    pub data: Cow<'static, [u32]>,
    /// последовательности кодпоинтов: код << 8 | CCC
    pub expansions: Cow<'static, [u32]>,
}

impl From<data::DecompositionData<'static>> for DecompositionTables
{
    fn from(source: data::DecompositionData<'static>) -> Self
    {
        Self {
            index: source.index.into(),
            data: source.data.into(),
            expansions: source.expansions.into(),
        }
    }
}

/// таблица пар канонической композиции, сгруппированных по первому кодпоинту
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionTable
{
    pub compositions: Cow<'static, [u64]>,
}

impl From<data::CompositionData<'static>> for CompositionTable
{
    fn from(source: data::CompositionData<'static>) -> Self
    {
        Self {
            compositions: source.compositions.into(),
        }
    }
}

/// приёмник нормализованного текста
trait Output
{
    fn push_char(&mut self, c: char);
}

impl Output for String
{
    #[inline(always)]
    fn push_char(&mut self, c: char)
    {
        self.push(c);
    }
}

impl Output for Vec<u16>
{
    #[inline(always)]
    fn push_char(&mut self, c: char)
    {
        let mut units = [0; 2];
        self.extend_from_slice(c.encode_utf16(&mut units));
    }
}

/// запись в fmt::Write, первая ошибка сохраняется
struct FmtOutput<'a, W: fmt::Write + ?Sized>
{
    sink: &'a mut W,
    result: fmt::Result,
}

impl<'a, W: fmt::Write + ?Sized> Output for FmtOutput<'a, W>
{
    #[inline(always)]
    fn push_char(&mut self, c: char)
    {
        if self.result.is_ok() {
            self.result = self.sink.write_char(c);
        }
    }
}

/// общая часть нормализаторов
#[derive(Debug, Clone, PartialEq, Eq)]
struct Normalizer
{
    decomposer: Decomposer,
    /// None - только декомпозиция
    composer: Option<Composer>,
}

impl Normalizer
{
    #[inline(always)]
    fn is_composing(&self) -> bool
    {
        self.composer.is_some()
    }

    /// нормализация сегмента: декомпозиция, каноническое упорядочивание, композиция
    fn normalize_segment(&self, segment: &[DecodedChar], buffer: &mut Vec<Codepoint>)
    {
        buffer.clear();

        for c in segment {
            self.decomposer.decompose(c.code(), buffer);
        }

        canonical_order(buffer);

        if let Some(composer) = &self.composer {
            composer.compose_segment(&self.decomposer, buffer);
        }
    }

    /// обход сегментов; f возвращает false, чтобы остановить обход
    fn for_each_segment<S, F>(&self, source: S, mut f: F)
    where
        S: CharSource,
        F: FnMut(&[DecodedChar]) -> bool,
    {
        let composing = self.is_composing();
        let mut segment: Vec<DecodedChar> = Vec::with_capacity(18);

        for c in source {
            if !segment.is_empty() && self.decomposer.is_boundary(c.code(), composing) {
                if !f(&segment) {
                    return;
                }
                segment.clear();
            }

            segment.push(c);
        }

        if !segment.is_empty() {
            f(&segment);
        }
    }

    fn normalize_into<S: CharSource>(&self, source: S, output: &mut impl Output)
    {
        let mut buffer = Vec::with_capacity(18);

        self.for_each_segment(source, |segment| {
            self.normalize_segment(segment, &mut buffer);
            buffer.iter().for_each(|&c| output.push_char(c.into()));

            true
        });
    }

    /// начало первого сегмента, нормализованная форма которого отличается от исходной,
    /// или длина входа, если таких сегментов нет
    fn is_normalized_up_to<S: CharSource>(&self, source: S) -> usize
    {
        let mut up_to = source.len_units();
        let mut buffer = Vec::with_capacity(18);

        self.for_each_segment(source, |segment| {
            self.normalize_segment(segment, &mut buffer);

            let normalized = !segment.iter().any(|c| c.replaced)
                && buffer.len() == segment.len()
                && buffer.iter().zip(segment).all(|(n, c)| n.code() == c.code());

            if !normalized {
                up_to = segment[0].offset;
            }

            normalized
        });

        up_to
    }
}

// методы нормализации одинаковы для композиции и декомпозиции
macro_rules! normalizer_methods {
    () => {
        /// нормализация строки
        pub fn normalize(&self, input: &str) -> String
        {
            let mut result = String::with_capacity(input.len());
            self.inner.normalize_into(Utf8Chars::new(input.as_bytes()), &mut result);

            result
        }

        /// нормализация UTF-8, возможно некорректного
        pub fn normalize_utf8(&self, input: &[u8]) -> String
        {
            let mut result = String::with_capacity(input.len());
            self.inner.normalize_into(Utf8Chars::new(input), &mut result);

            result
        }

        /// нормализация UTF-16, непарные суррогаты заменяются на U+FFFD
        pub fn normalize_utf16(&self, input: &[u16]) -> Vec<u16>
        {
            let mut result = Vec::with_capacity(input.len());
            self.inner.normalize_into(Utf16Chars::new(input), &mut result);

            result
        }

        /// нормализация с записью в приёмник
        pub fn normalize_to<W: fmt::Write + ?Sized>(&self, input: &str, sink: &mut W) -> fmt::Result
        {
            let mut output = FmtOutput {
                sink,
                result: Ok(()),
            };
            self.inner.normalize_into(Utf8Chars::new(input.as_bytes()), &mut output);

            output.result
        }

        pub fn is_normalized(&self, input: &str) -> bool
        {
            self.is_normalized_up_to(input) == input.len()
        }

        pub fn is_normalized_utf8(&self, input: &[u8]) -> bool
        {
            self.is_normalized_utf8_up_to(input) == input.len()
        }

        pub fn is_normalized_utf16(&self, input: &[u16]) -> bool
        {
            self.is_normalized_utf16_up_to(input) == input.len()
        }

        /// длина (в байтах) нормализованного начала строки
        pub fn is_normalized_up_to(&self, input: &str) -> usize
        {
            self.inner.is_normalized_up_to(Utf8Chars::new(input.as_bytes()))
        }

        pub fn is_normalized_utf8_up_to(&self, input: &[u8]) -> usize
        {
            self.inner.is_normalized_up_to(Utf8Chars::new(input))
        }

        /// длина (в u16) нормализованного начала текста
        pub fn is_normalized_utf16_up_to(&self, input: &[u16]) -> usize
        {
            self.inner.is_normalized_up_to(Utf16Chars::new(input))
        }
    };
}

/// нормализатор NF(K)C
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposingNormalizer
{
    inner: Normalizer,
}

impl ComposingNormalizer
{
    normalizer_methods!();

    /// NFC-нормализатор
    pub fn try_new_nfc<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self::from_tables(
            load_singleton::<NfdTablesV1, P>(provider)?,
            load_singleton::<CompositionsV1, P>(provider)?,
        ))
    }

    /// NFKC-нормализатор
    pub fn try_new_nfkc<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self::from_tables(
            load_singleton::<NfkdTablesV1, P>(provider)?,
            load_singleton::<CompositionsV1, P>(provider)?,
        ))
    }

    /// NFC на запечённых данных
    pub fn new_nfc() -> Self
    {
        Self::from_tables(data::normalizer::nfd().into(), data::normalizer::compositions().into())
    }

    /// NFKC на запечённых данных
    pub fn new_nfkc() -> Self
    {
        Self::from_tables(data::normalizer::nfkd().into(), data::normalizer::compositions().into())
    }

    pub fn from_tables(decompositions: DecompositionTables, compositions: CompositionTable) -> Self
    {
        Self {
            inner: Normalizer {
                decomposer: Decomposer::new(decompositions),
                composer: Some(Composer::new(compositions)),
            },
        }
    }
}

/// нормализатор NF(K)D
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposingNormalizer
{
    inner: Normalizer,
}

impl DecomposingNormalizer
{
    normalizer_methods!();

    /// NFD-нормализатор
    pub fn try_new_nfd<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self::from_tables(load_singleton::<NfdTablesV1, P>(provider)?))
    }

    /// NFKD-нормализатор
    pub fn try_new_nfkd<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self::from_tables(load_singleton::<NfkdTablesV1, P>(provider)?))
    }

    pub fn new_nfd() -> Self
    {
        Self::from_tables(data::normalizer::nfd().into())
    }

    pub fn new_nfkd() -> Self
    {
        Self::from_tables(data::normalizer::nfkd().into())
    }

    pub fn from_tables(decompositions: DecompositionTables) -> Self
    {
        Self {
            inner: Normalizer {
                decomposer: Decomposer::new(decompositions),
                composer: None,
            },
        }
    }
}
