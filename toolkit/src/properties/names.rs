use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::collections::StringList;
use crate::data::NamesData;
use crate::error::DataError;
use crate::provider::markers::*;
use crate::provider::{load_singleton, DataMarker, DataProvider};

/// отсутствующее короткое / длинное имя
const NO_NAME: u16 = 0xFFFF;

/// имена значений свойства
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValueNames
{
    /// все имена и псевдонимы, отсортированы по байтам
    pub names: StringList,
    /// значение для каждого имени
    pub values: Cow<'static, [u32]>,
    /// значение -> индекс короткого имени
    pub short: Cow<'static, [u16]>,
    /// значение -> индекс длинного имени
    pub long: Cow<'static, [u16]>,
}

impl PropertyValueNames
{
    fn name_at(&self, table: &[u16], value: u32) -> Option<&str>
    {
        match table.get(value as usize).copied() {
            None | Some(NO_NAME) => None,
            Some(index) => self.names.get(index as usize),
        }
    }
}

impl From<NamesData<'static>> for PropertyValueNames
{
    fn from(source: NamesData<'static>) -> Self
    {
        Self {
            names: StringList::new(source.names.into(), source.ends.into()),
            values: source.values.into(),
            short: source.short.into(),
            long: source.long.into(),
        }
    }
}

/// ключ нестрогого сравнения: без учёта регистра ASCII, пробелов, '_' и '-'
fn loose_key(name: &str) -> String
{
    name.chars()
        .filter(|c| !(c.is_whitespace() || *c == '_' || *c == '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// поиск значения по имени, общая часть отображений в перечисление и в маску
#[derive(Debug, Clone)]
struct NameLookup
{
    names: PropertyValueNames,
    /// ключ нестрогого сравнения -> (значение, длина имени)
    loose: HashMap<String, (u32, usize)>,
}

impl NameLookup
{
    fn new(names: PropertyValueNames) -> Self
    {
        let mut loose: HashMap<String, (u32, usize)> = HashMap::new();

        for (name, &value) in names.names.iter().zip(names.values.iter()) {
            let candidate = (value, name.len());

            loose
                .entry(loose_key(name))
                .and_modify(|current| {
                    // при совпадении ключей у разных значений выигрывает более короткое имя
                    if (candidate.1, candidate.0) < (current.1, current.0) {
                        *current = candidate;
                    }
                })
                .or_insert(candidate);
        }

        Self { names, loose }
    }

    fn strict(&self, name: &str) -> Option<u32>
    {
        let index = self.names.names.binary_search(name).ok()?;

        self.names.values.get(index).copied()
    }

    fn loose(&self, name: &str) -> Option<u32>
    {
        self.loose.get(&loose_key(name)).map(|(value, _)| *value)
    }
}

/// имя значения свойства -> значение (дискриминант перечисления), -1 если имя неизвестно
#[derive(Debug, Clone)]
pub struct PropertyValueNameToEnumMapper
{
    lookup: NameLookup,
}

impl PropertyValueNameToEnumMapper
{
    pub fn from_names(names: PropertyValueNames) -> Self
    {
        Self {
            lookup: NameLookup::new(names),
        }
    }

    /// точное совпадение с именем или псевдонимом
    pub fn get_strict(&self, name: &str) -> i16
    {
        Self::discriminant(self.lookup.strict(name))
    }

    /// совпадение без учёта регистра, пробелов, '_' и '-'
    pub fn get_loose(&self, name: &str) -> i16
    {
        Self::discriminant(self.lookup.loose(name))
    }

    #[inline(always)]
    fn discriminant(value: Option<u32>) -> i16
    {
        value
            .and_then(|value| i16::try_from(value).ok())
            .unwrap_or(-1)
    }

    fn load<M, P>(provider: &P) -> Result<Self, DataError>
    where
        M: DataMarker<DataStruct = PropertyValueNames>,
        P: DataProvider + ?Sized,
    {
        Ok(Self::from_names(load_singleton::<M, P>(provider)?))
    }
}

/// имя категории или группы категорий -> маска GeneralCategoryGroup, 0 если имя неизвестно
#[derive(Debug, Clone)]
pub struct GeneralCategoryNameToMaskMapper
{
    lookup: NameLookup,
}

impl GeneralCategoryNameToMaskMapper
{
    pub fn from_names(names: PropertyValueNames) -> Self
    {
        Self {
            lookup: NameLookup::new(names),
        }
    }

    pub fn get_strict(&self, name: &str) -> u32
    {
        self.lookup.strict(name).unwrap_or(0)
    }

    pub fn get_loose(&self, name: &str) -> u32
    {
        self.lookup.loose(name).unwrap_or(0)
    }

    pub fn load<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self::from_names(load_singleton::<GeneralCategoryMaskNamesV1, P>(
            provider,
        )?))
    }
}

/// значение свойства -> короткое / длинное имя
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEnumToValueNameMapper
{
    names: PropertyValueNames,
}

impl PropertyEnumToValueNameMapper
{
    pub fn from_names(names: PropertyValueNames) -> Self
    {
        Self { names }
    }

    pub fn get_short_name(&self, value: u32) -> Option<&str>
    {
        self.names.name_at(&self.names.short, value)
    }

    pub fn get_long_name(&self, value: u32) -> Option<&str>
    {
        self.names.name_at(&self.names.long, value)
    }

    fn load<M, P>(provider: &P) -> Result<Self, DataError>
    where
        M: DataMarker<DataStruct = PropertyValueNames>,
        P: DataProvider + ?Sized,
    {
        Ok(Self::from_names(load_singleton::<M, P>(provider)?))
    }
}

macro_rules! name_loaders {
    ($($fn:ident => $marker:ty;)*) => {
        impl PropertyValueNameToEnumMapper
        {
            $(
                pub fn $fn<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
                {
                    Self::load::<$marker, P>(provider)
                }
            )*
        }

        impl PropertyEnumToValueNameMapper
        {
            $(
                pub fn $fn<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
                {
                    Self::load::<$marker, P>(provider)
                }
            )*
        }
    };
}

name_loaders! {
    load_general_category => GeneralCategoryNamesV1;
    load_bidi_class => BidiClassNamesV1;
    load_east_asian_width => EastAsianWidthNamesV1;
    load_hangul_syllable_type => HangulSyllableTypeNamesV1;
    load_indic_syllabic_category => IndicSyllabicCategoryNamesV1;
    load_line_break => LineBreakNamesV1;
    load_grapheme_cluster_break => GraphemeClusterBreakNamesV1;
    load_word_break => WordBreakNamesV1;
    load_sentence_break => SentenceBreakNamesV1;
    load_joining_type => JoiningTypeNamesV1;
    load_canonical_combining_class => CanonicalCombiningClassNamesV1;
    load_script => ScriptNamesV1;
}
