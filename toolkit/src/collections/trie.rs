use std::borrow::Cow;
use std::fmt::Debug;
use std::ops::RangeInclusive;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::data::TrieData;

/// последний кодпоинт Unicode
pub const CODE_POINT_MAX: u32 = 0x10FFFF;

/// BMP: кодпоинт >> 6 - номер блока в индексе
const BMP_SHIFT: u32 = 6;
/// размер блока данных
const BLOCK_LEN: u32 = 1 << BMP_SHIFT;
const BLOCK_MASK: u32 = BLOCK_LEN - 1;
/// дополнительные плоскости: кодпоинт >> 12 - индекс первого уровня
const SUPP_SHIFT: u32 = 12;
/// длина части индекса для BMP
const BMP_INDEX_LEN: u32 = 0x10000 >> BMP_SHIFT;
/// количество записей второго уровня
const INDEX2_MASK: u32 = (1 << (SUPP_SHIFT - BMP_SHIFT)) - 1;
/// первый уровень индекса начинается с плоскости 1 (0x10000 >> 12)
const SUPP_INDEX_OFFSET: u32 = 0x10000 >> SUPP_SHIFT;

/// значение, хранимое в CodePointTrie
pub trait TrieValue:
    Copy + Eq + Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn to_u32(self) -> u32;
    fn from_u32(value: u32) -> Self;
}

macro_rules! trie_value {
    ($($ty:ty),*) => {
        $(
            impl TrieValue for $ty
            {
                #[inline(always)]
                fn to_u32(self) -> u32
                {
                    self as u32
                }

                #[inline(always)]
                fn from_u32(value: u32) -> Self
                {
                    value as $ty
                }
            }
        )*
    };
}

trie_value!(u8, u16, u32);

/// диапазон кодпоинтов с одинаковым значением
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointMapRange<V>
{
    pub range: RangeInclusive<u32>,
    pub value: V,
}

/// отображение кодпоинт -> значение
///
/// BMP: двухуровневая схема index[cp >> 6] -> блок из 64 значений.
/// дополнительные плоскости ниже high_start: index[1024 + (cp >> 12) - 16] -> позиция второго уровня,
/// index[позиция + ((cp >> 6) & 63)] -> блок. кодпоинты high_start ..= U+10FFFF имеют значение high_value,
/// всё, что выше U+10FFFF - error_value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct CodePointTrie<V: TrieValue>
{
    index: Cow<'static, [u16]>,
    data: Cow<'static, [V]>,
    high_start: u32,
    high_value: V,
    error_value: V,
}

impl<V: TrieValue> CodePointTrie<V>
{
    /// трие из готовых таблиц (например, только что построенных генератором)
    pub fn from_parts(index: Vec<u16>, data: Vec<V>, high_start: u32, high_value: V, error_value: V) -> Self
    {
        Self {
            index: Cow::Owned(index),
            data: Cow::Owned(data),
            high_start,
            high_value,
            error_value,
        }
    }

    /// значение для кодпоинта. любое 32-битное значение допустимо
    #[inline]
    pub fn get32(&self, code: u32) -> V
    {
        match code < 0x10000 {
            true => self.block_value(self.bmp_block(code), code),
            false => match code {
                _ if code < self.high_start => match self.supp_block(code) {
                    Some(block) => self.block_value(Some(block), code),
                    None => self.error_value,
                },
                _ if code <= CODE_POINT_MAX => self.high_value,
                _ => self.error_value,
            },
        }
    }

    /// значение для символа
    #[inline]
    pub fn get(&self, c: char) -> V
    {
        self.get32(c as u32)
    }

    /// значение за пределами U+10FFFF
    pub fn error_value(&self) -> V
    {
        self.error_value
    }

    /// начало диапазона, в котором все кодпоинты имеют значение high_value
    pub fn high_start(&self) -> u32
    {
        self.high_start
    }

    /// максимальный диапазон, начинающийся с start, в котором все значения совпадают
    pub fn get_range(&self, start: u32) -> Option<CodePointMapRange<V>>
    {
        if start > CODE_POINT_MAX {
            return None;
        }

        let value = self.get32(start);
        let mut end = start;
        // последний блок, целиком состоящий из value
        let mut uniform_block = None;

        loop {
            let next = end + 1;

            if next > CODE_POINT_MAX {
                break;
            }

            if next >= self.high_start {
                if self.high_value == value {
                    end = CODE_POINT_MAX;
                }
                break;
            }

            if next & BLOCK_MASK == 0 {
                let block = self.block_of(next);

                if block.is_some() && block == uniform_block {
                    end = next + BLOCK_MASK;
                    continue;
                }

                if let Some(block) = block {
                    if self.block_is_uniform(block, value) {
                        uniform_block = Some(block);
                        end = next + BLOCK_MASK;
                        continue;
                    }
                }
            }

            if self.get32(next) != value {
                break;
            }

            end = next;
        }

        Some(CodePointMapRange {
            range: start ..= end,
            value,
        })
    }

    /// все диапазоны значений по возрастанию
    pub fn iter_ranges(&self) -> impl Iterator<Item = CodePointMapRange<V>> + Send + '_
    {
        let mut next = Some(0);

        std::iter::from_fn(move || {
            let range = self.get_range(next?)?;

            next = match *range.range.end() < CODE_POINT_MAX {
                true => Some(range.range.end() + 1),
                false => None,
            };

            Some(range)
        })
    }

    /// количество блоков данных
    pub fn blocks_count(&self) -> usize
    {
        self.data.len() >> BMP_SHIFT
    }

    /// размер индекса
    pub fn index_len(&self) -> usize
    {
        self.index.len()
    }

    /// номер блока для кодпоинта BMP
    #[inline(always)]
    fn bmp_block(&self, code: u32) -> Option<u16>
    {
        self.index.get((code >> BMP_SHIFT) as usize).copied()
    }

    /// номер блока для кодпоинта дополнительных плоскостей
    #[inline(always)]
    fn supp_block(&self, code: u32) -> Option<u16>
    {
        let i1 = BMP_INDEX_LEN + (code >> SUPP_SHIFT) - SUPP_INDEX_OFFSET;
        let i2 = *self.index.get(i1 as usize)? as u32;

        self.index
            .get((i2 + ((code >> BMP_SHIFT) & INDEX2_MASK)) as usize)
            .copied()
    }

    #[inline(always)]
    fn block_of(&self, code: u32) -> Option<u16>
    {
        match code < 0x10000 {
            true => self.bmp_block(code),
            false => self.supp_block(code),
        }
    }

    #[inline(always)]
    fn block_value(&self, block: Option<u16>, code: u32) -> V
    {
        block
            .and_then(|block| {
                let index = ((block as u32) << BMP_SHIFT) | (code & BLOCK_MASK);
                self.data.get(index as usize).copied()
            })
            .unwrap_or(self.error_value)
    }

    fn block_is_uniform(&self, block: u16, value: V) -> bool
    {
        let start = (block as usize) << BMP_SHIFT;

        match self.data.get(start .. start + BLOCK_LEN as usize) {
            Some(values) => values.iter().all(|v| *v == value),
            None => false,
        }
    }
}

impl<V: TrieValue> From<TrieData<'static, V>> for CodePointTrie<V>
{
    fn from(source: TrieData<'static, V>) -> Self
    {
        Self {
            index: Cow::Borrowed(source.index),
            data: Cow::Borrowed(source.data),
            high_start: source.high_start,
            high_value: source.high_value,
            error_value: source.error_value,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::data::maps;

    #[test]
    fn general_category()
    {
        let trie = CodePointTrie::from(maps::gc());

        // Lu, Ll, Lo, Nd
        assert_eq!(trie.get('A'), 1);
        assert_eq!(trie.get('z'), 2);
        assert_eq!(trie.get('木'), 5);
        assert_eq!(trie.get('7'), 9);
        // дополнительная плоскость: 𝐀 - Lu
        assert_eq!(trie.get32(0x1D400), 1);
        // суррогаты - Cs
        assert_eq!(trie.get32(0xD800), 18);
        // за пределами Unicode
        assert_eq!(trie.get32(0x110000), trie.error_value());
        assert_eq!(trie.get32(u32::MAX), trie.error_value());
    }

    #[test]
    fn ranges()
    {
        let trie = CodePointTrie::from(maps::gc());

        let range = trie.get_range(0x41).unwrap();
        assert_eq!(range.range, 0x41 ..= 0x5A);
        assert_eq!(range.value, 1);

        let ranges: Vec<_> = trie.iter_ranges().collect();

        assert_eq!(*ranges[0].range.start(), 0);
        assert_eq!(*ranges.last().unwrap().range.end(), CODE_POINT_MAX);

        // диапазоны смежные и соседние значения различаются
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].range.end() + 1, *pair[1].range.start());
            assert_ne!(pair[0].value, pair[1].value);
        }
    }

    #[test]
    fn serde_owned()
    {
        let trie = CodePointTrie::from(maps::sc());
        let bytes = postcard::to_allocvec(&trie).unwrap();
        let owned: CodePointTrie<u16> = postcard::from_bytes(&bytes).unwrap();

        assert_eq!(owned, trie);
        assert_eq!(owned.get('ж'), trie.get('ж'));
    }
}
