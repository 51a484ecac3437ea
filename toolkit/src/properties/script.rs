use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::collections::{CodePointInversionList, CodePointRangeIterator, CodePointTrie};
use crate::data::ScriptExtensionsData;
use crate::error::DataError;
use crate::provider::markers::ScriptWithExtensionsV1;
use crate::provider::{load_singleton, DataProvider};

use super::props::Script;
use super::sets::CodePointSetData;

/// признак того, что значение в trie - индекс набора письменностей
const EXTENSIONS_FLAG: u16 = 0x8000;
const EXTENSIONS_MASK: u16 = EXTENSIONS_FLAG - 1;

/// Script + Script_Extensions: в trie либо письменность, либо 0x8000 | номер набора.
/// набор начинается с основной письменности, остальные - по возрастанию
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptWithExtensionsTables
{
    pub trie: CodePointTrie<u16>,
    /// начала наборов в ext_data, последний элемент - длина ext_data
    pub ext_index: Cow<'static, [u16]>,
    pub ext_data: Cow<'static, [u16]>,
}

impl From<ScriptExtensionsData<'static>> for ScriptWithExtensionsTables
{
    fn from(source: ScriptExtensionsData<'static>) -> Self
    {
        Self {
            trie: source.trie.into(),
            ext_index: source.ext_index.into(),
            ext_data: source.ext_data.into(),
        }
    }
}

/// письменности кодпоинта: основная + остальные из Script_Extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptExtensionsSet<'a>
{
    primary: Script,
    rest: &'a [u16],
}

impl<'a> ScriptExtensionsSet<'a>
{
    pub fn contains(&self, script: Script) -> bool
    {
        self.primary == script || self.rest.binary_search(&script.0).is_ok()
    }

    /// количество письменностей, не меньше 1
    pub fn count(&self) -> usize
    {
        1 + self.rest.len()
    }

    pub fn len(&self) -> usize
    {
        self.count()
    }

    pub fn is_empty(&self) -> bool
    {
        false
    }

    /// письменность по индексу, 0 - основная
    pub fn script_at(&self, index: usize) -> Option<Script>
    {
        match index {
            0 => Some(self.primary),
            _ => self.rest.get(index - 1).map(|&s| Script(s)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Script> + 'a
    {
        std::iter::once(self.primary).chain(self.rest.iter().map(|&s| Script(s)))
    }
}

/// Script и Script_Extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptWithExtensions
{
    tables: ScriptWithExtensionsTables,
}

impl ScriptWithExtensions
{
    pub fn from_tables(tables: ScriptWithExtensionsTables) -> Self
    {
        Self { tables }
    }

    pub fn load<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self::from_tables(load_singleton::<ScriptWithExtensionsV1, P>(provider)?))
    }

    pub fn as_borrowed(&self) -> ScriptWithExtensionsBorrowed<'_>
    {
        ScriptWithExtensionsBorrowed {
            tables: &self.tables,
        }
    }

    pub fn get_script_val(&self, code: u32) -> Script
    {
        self.as_borrowed().get_script_val(code)
    }

    pub fn has_script(&self, code: u32, script: Script) -> bool
    {
        self.as_borrowed().has_script(code, script)
    }

    pub fn get_script_extensions_val(&self, code: u32) -> ScriptExtensionsSet<'_>
    {
        self.as_borrowed().get_script_extensions_val(code)
    }

    pub fn iter_ranges_for_script(&self, script: Script) -> CodePointRangeIterator<'_>
    {
        self.as_borrowed().iter_ranges_for_script(script)
    }

    pub fn get_script_extensions_set(&self, script: Script) -> CodePointSetData
    {
        self.as_borrowed().get_script_extensions_set(script)
    }
}

/// представление данных ScriptWithExtensions без владения
#[derive(Debug, Clone, Copy)]
pub struct ScriptWithExtensionsBorrowed<'a>
{
    tables: &'a ScriptWithExtensionsTables,
}

impl<'a> ScriptWithExtensionsBorrowed<'a>
{
    /// основная письменность (Script)
    pub fn get_script_val(&self, code: u32) -> Script
    {
        self.extensions_of(self.tables.trie.get32(code)).primary
    }

    /// входит ли письменность в Script_Extensions кодпоинта
    pub fn has_script(&self, code: u32, script: Script) -> bool
    {
        self.get_script_extensions_val(code).contains(script)
    }

    pub fn get_script_extensions_val(&self, code: u32) -> ScriptExtensionsSet<'a>
    {
        self.extensions_of(self.tables.trie.get32(code))
    }

    /// диапазоны кодпоинтов, у которых письменность входит в Script_Extensions
    pub fn iter_ranges_for_script(&self, script: Script) -> CodePointRangeIterator<'a>
    {
        let this = *self;

        CodePointRangeIterator::coalesced(
            self.tables
                .trie
                .iter_ranges()
                .filter(move |range| this.extensions_of(range.value).contains(script))
                .map(|range| range.range),
        )
    }

    pub fn get_script_extensions_set(&self, script: Script) -> CodePointSetData
    {
        CodePointSetData::from_inversion_list(CodePointInversionList::from_ranges(
            self.iter_ranges_for_script(script),
        ))
    }

    #[inline]
    fn extensions_of(&self, value: u16) -> ScriptExtensionsSet<'a>
    {
        if value & EXTENSIONS_FLAG == 0 {
            return ScriptExtensionsSet {
                primary: Script(value),
                rest: &[],
            };
        }

        let set = (value & EXTENSIONS_MASK) as usize;
        let index = &self.tables.ext_index;

        let scripts = match (index.get(set), index.get(set + 1)) {
            (Some(&start), Some(&end)) => self.tables.ext_data.get(start as usize .. end as usize),
            _ => None,
        };

        match scripts {
            Some([primary, rest @ ..]) => ScriptExtensionsSet {
                primary: Script(*primary),
                rest,
            },
            _ => ScriptExtensionsSet {
                primary: Script::Unknown,
                rest: &[],
            },
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::provider::BakedProvider;

    #[test]
    fn script_values()
    {
        let scx = ScriptWithExtensions::load(&BakedProvider).unwrap();

        assert_eq!(scx.get_script_val('A' as u32), Script::Latin);
        assert_eq!(scx.get_script_val(0x11005), Script::Brahmi);
        // ARABIC TATWEEL
        assert_eq!(scx.get_script_val(0x640), Script::Common);
        assert_eq!(scx.get_script_val(0x10FFFF), Script::Unknown);
        assert_eq!(scx.get_script_val(0x110000), Script::Common);
    }

    #[test]
    fn extensions()
    {
        let scx = ScriptWithExtensions::load(&BakedProvider).unwrap();

        // KATAKANA-HIRAGANA PROLONGED SOUND MARK
        let set = scx.get_script_extensions_val(0x30FC);
        assert_eq!(set.count(), 3);
        assert_eq!(set.script_at(0), Some(Script::Common));
        assert_eq!(set.script_at(1), Some(Script::Hiragana));
        assert_eq!(set.script_at(2), Some(Script::Katakana));
        assert_eq!(set.script_at(3), None);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Script::Common, Script::Hiragana, Script::Katakana]
        );

        assert!(scx.has_script(0x640, Script::Arabic));
        assert!(scx.has_script(0x640, Script::Syriac));
        assert!(!scx.has_script(0x640, Script::Latin));

        let latin = scx.get_script_extensions_val('A' as u32);
        assert_eq!(latin.count(), 1);
        assert!(latin.contains(Script::Latin));
    }

    #[test]
    fn ranges()
    {
        let scx = ScriptWithExtensions::load(&BakedProvider).unwrap();
        let borrowed = scx.as_borrowed();

        let brahmi: Vec<_> = borrowed.iter_ranges_for_script(Script::Brahmi).collect();
        assert_eq!(brahmi, vec![0x11000 ..= 0x1104D, 0x11052 ..= 0x11075, 0x1107F ..= 0x1107F]);

        let mut hiragana = borrowed.iter_ranges_for_script(Script::Hiragana);
        assert_eq!(hiragana.next(), Some(0x3001 ..= 0x3003));

        let set = scx.get_script_extensions_set(Script::Hiragana);
        assert!(set.contains(0x3042));
        assert!(set.contains(0x30FC));
        assert!(!set.contains(0x30A2 + 0x100));
    }
}
