use crate::collections::{CodePointInversionList, CodePointMapRange, CodePointRangeIterator, CodePointTrie, TrieValue};
use crate::error::DataError;
use crate::provider::markers::*;
use crate::provider::{load_singleton, DataMarker, DataProvider};

/// отображение кодпоинт -> значение свойства
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointMapData<V: TrieValue>
{
    trie: CodePointTrie<V>,
}

/// карта с 8-битными значениями (General_Category, Line_Break и т.п.)
pub type CodePointMapData8 = CodePointMapData<u8>;
/// карта с 16-битными значениями (Script)
pub type CodePointMapData16 = CodePointMapData<u16>;

impl<V: TrieValue> CodePointMapData<V>
{
    pub fn from_trie(trie: CodePointTrie<V>) -> Self
    {
        Self { trie }
    }

    /// значение свойства. для суррогатов и значений вне Unicode - значение по умолчанию карты
    #[inline]
    pub fn get(&self, code: u32) -> V
    {
        self.trie.get32(code)
    }

    #[inline]
    pub fn get32(&self, code: u32) -> V
    {
        self.get(code)
    }

    #[inline]
    pub fn get_char(&self, c: char) -> V
    {
        self.trie.get(c)
    }

    /// все диапазоны с их значениями
    pub fn iter_ranges(&self) -> impl Iterator<Item = CodePointMapRange<V>> + Send + '_
    {
        self.trie.iter_ranges()
    }

    /// максимальные диапазоны кодпоинтов со значением value
    pub fn iter_ranges_for_value(&self, value: V) -> CodePointRangeIterator<'_>
    {
        CodePointRangeIterator::new(
            self.trie
                .iter_ranges()
                .filter(move |range| range.value == value)
                .map(|range| range.range),
        )
    }

    /// максимальные диапазоны кодпоинтов со значением, отличным от value
    pub fn iter_ranges_for_value_complemented(&self, value: V) -> CodePointRangeIterator<'_>
    {
        CodePointRangeIterator::coalesced(
            self.trie
                .iter_ranges()
                .filter(move |range| range.value != value)
                .map(|range| range.range),
        )
    }

    /// множество кодпоинтов со значением value
    pub fn get_set_for_value(&self, value: V) -> CodePointInversionList
    {
        CodePointInversionList::from_ranges(self.iter_ranges_for_value(value))
    }

    pub fn as_trie(&self) -> &CodePointTrie<V>
    {
        &self.trie
    }

    fn load<M, P>(provider: &P) -> Result<Self, DataError>
    where
        M: DataMarker<DataStruct = CodePointTrie<V>>,
        P: DataProvider + ?Sized,
    {
        Ok(Self::from_trie(load_singleton::<M, P>(provider)?))
    }
}

/// бит маски для категории. значения от 32 и выше не имеют бита
#[inline(always)]
pub fn general_category_to_mask(gc: u8) -> u32
{
    match gc < 32 {
        true => 1 << gc,
        false => 0,
    }
}

macro_rules! map_loaders {
    ($ty:ty { $($(#[$meta:meta])* $fn:ident => $marker:ty;)* }) => {
        impl $ty
        {
            $(
                $(#[$meta])*
                pub fn $fn<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
                {
                    Self::load::<$marker, P>(provider)
                }
            )*
        }
    };
}

map_loaders!(CodePointMapData8 {
    /// General_Category, значения - GeneralCategory
    load_general_category => GeneralCategoryV1;
    load_bidi_class => BidiClassV1;
    load_east_asian_width => EastAsianWidthV1;
    load_hangul_syllable_type => HangulSyllableTypeV1;
    load_indic_syllabic_category => IndicSyllabicCategoryV1;
    load_line_break => LineBreakV1;
    load_grapheme_cluster_break => GraphemeClusterBreakV1;
    load_word_break => WordBreakV1;
    load_sentence_break => SentenceBreakV1;
    load_joining_type => JoiningTypeV1;
    load_canonical_combining_class => CanonicalCombiningClassV1;
});

map_loaders!(CodePointMapData16 {
    /// Script, значения - Script
    load_script => ScriptV1;
});

impl CodePointMapData8
{
    /// объединение диапазонов, у значений которых установлен бит в mask.
    /// значение трактуется как номер бита, как у General_Category
    pub fn iter_ranges_for_mask(&self, mask: u32) -> CodePointRangeIterator<'_>
    {
        CodePointRangeIterator::coalesced(
            self.trie
                .iter_ranges()
                .filter(move |range| general_category_to_mask(range.value) & mask != 0)
                .map(|range| range.range),
        )
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::properties::{GeneralCategory, GeneralCategoryGroup, LineBreak, Script};
    use crate::provider::{BakedProvider, EmptyDataProvider};
    use crate::DataErrorKind;

    #[test]
    fn general_category()
    {
        let gc = CodePointMapData8::load_general_category(&BakedProvider).unwrap();

        assert_eq!(gc.get(0x6728), GeneralCategory::OtherLetter.0);
        assert_eq!(gc.get(0x6728), 5);
        assert_eq!(gc.get_char('A'), GeneralCategory::UppercaseLetter.0);
        assert_eq!(gc.get(0xD800), GeneralCategory::Surrogate.0);
        assert_eq!(gc.get(0x110000), 0);
    }

    #[test]
    fn mask()
    {
        let gc = CodePointMapData8::load_general_category(&BakedProvider).unwrap();

        let mut ranges = gc.iter_ranges_for_mask(general_category_to_mask(GeneralCategory::UppercaseLetter.0));
        assert_eq!(ranges.next(), Some(0x41 ..= 0x5A));

        let mut letters = gc.iter_ranges_for_mask(GeneralCategoryGroup::Letter.0);
        assert_eq!(letters.next(), Some(0x41 ..= 0x5A));
        assert_eq!(letters.next(), Some(0x61 ..= 0x7A));

        assert_eq!(general_category_to_mask(40), 0);
    }

    #[test]
    fn ranges_for_value()
    {
        let gc = CodePointMapData8::load_general_category(&BakedProvider).unwrap();

        let mut digits = gc.iter_ranges_for_value(GeneralCategory::DecimalNumber.0);
        assert_eq!(digits.next(), Some(0x30 ..= 0x39));

        let set = gc.get_set_for_value(GeneralCategory::DecimalNumber.0);
        assert!(set.contains('٣'));
        assert!(!set.contains('a'));

        // дополнение: ровно одно из двух множеств содержит кодпоинт
        let complement = CodePointInversionList::from_ranges(
            gc.iter_ranges_for_value_complemented(GeneralCategory::DecimalNumber.0),
        );
        for code in [0x30, 0x41, 0x660, 0xD800, 0x1D7CE, 0x10FFFF] {
            assert_ne!(set.contains32(code), complement.contains32(code));
        }
        assert_eq!(set.size() + complement.size(), 0x110000);
    }

    #[test]
    fn script()
    {
        let sc = CodePointMapData16::load_script(&BakedProvider).unwrap();

        assert_eq!(sc.get_char('ж'), Script::Cyrillic.0);
        assert_eq!(sc.get_char('1'), Script::Common.0);
        assert_eq!(sc.get(0x11005), Script::Brahmi.0);
    }

    #[test]
    fn line_break()
    {
        let lb = CodePointMapData8::load_line_break(&BakedProvider).unwrap();

        // дефисы и тире - BA
        for code in [0x58A, 0x5BE, 0x1400, 0x2010, 0x2012, 0x2013, 0x2E17, 0x2E40, 0x10EAD] {
            assert_eq!(lb.get(code), LineBreak::BreakAfter.0, "U+{:04X}", code);
        }
        // COMBINING GRAPHEME JOINER
        assert_eq!(lb.get(0x34F), LineBreak::Glue.0);
        // цифры брахмийских письменностей - NU, полноширинные - ID
        assert_eq!(lb.get(0x1B50), LineBreak::Numeric.0);
        assert_eq!(lb.get(0xA9D0), LineBreak::Numeric.0);
        assert_eq!(lb.get(0xFF10), LineBreak::Ideographic.0);
        // BALINESE LETTER AKARA, BALINESE ADEG ADEG
        assert_eq!(lb.get(0x1B05), LineBreak::Alphabetic.0);
        assert_eq!(lb.get(0x1B44), LineBreak::CombiningMark.0);
        // незанятые кодпоинты CJK
        assert_eq!(lb.get(0x3FFFD), LineBreak::Ideographic.0);
        assert_eq!(lb.get(0x378), LineBreak::Unknown.0);
    }

    #[test]
    fn missing_data()
    {
        let error = CodePointMapData8::load_line_break(&EmptyDataProvider).unwrap_err();

        assert_eq!(error.kind, DataErrorKind::MarkerNotFound);
    }
}
