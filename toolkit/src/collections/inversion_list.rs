use std::borrow::Cow;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::trie::CODE_POINT_MAX;
use crate::data::InversionListData;

/// множество кодпоинтов в виде инверсионного списка [начало, конец + 1, начало, конец + 1, ...].
/// диапазоны отсортированы, не пересекаются и не соприкасаются
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePointInversionList
{
    inv_list: Cow<'static, [u32]>,
    /// количество кодпоинтов в множестве
    size: u32,
}

impl CodePointInversionList
{
    /// входит ли кодпоинт в множество
    #[inline]
    pub fn contains32(&self, code: u32) -> bool
    {
        self.inv_list.partition_point(|&x| x <= code) % 2 == 1
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool
    {
        self.contains32(c as u32)
    }

    /// диапазоны множества (включительно)
    pub fn iter_ranges(&self) -> impl Iterator<Item = RangeInclusive<u32>> + Send + '_
    {
        self.inv_list
            .chunks_exact(2)
            .map(|pair| pair[0] ..= pair[1] - 1)
    }

    /// диапазоны дополнения множества до U+0000 ..= U+10FFFF
    pub fn iter_ranges_complemented(&self) -> impl Iterator<Item = RangeInclusive<u32>> + Send + '_
    {
        let mut bounds = std::iter::once(0)
            .chain(self.inv_list.iter().copied())
            .chain(std::iter::once(CODE_POINT_MAX + 1));

        std::iter::from_fn(move || loop {
            let start = bounds.next()?;
            let end = bounds.next()?;

            if start < end {
                return Some(start ..= end - 1);
            }
        })
    }

    /// количество диапазонов
    pub fn ranges_count(&self) -> usize
    {
        self.inv_list.len() / 2
    }

    /// количество кодпоинтов
    pub fn size(&self) -> usize
    {
        self.size as usize
    }

    pub fn is_empty(&self) -> bool
    {
        self.inv_list.is_empty()
    }

    /// множество из диапазонов, отсортированных по возрастанию. смежные диапазоны склеиваются
    pub fn from_ranges(ranges: impl IntoIterator<Item = RangeInclusive<u32>>) -> Self
    {
        let mut inv_list: Vec<u32> = vec![];

        for range in ranges {
            let (start, end) = (*range.start(), *range.end() + 1);

            match inv_list.last_mut() {
                Some(last) if *last >= start => *last = (*last).max(end),
                _ => {
                    inv_list.push(start);
                    inv_list.push(end);
                }
            }
        }

        Self::from_inv_list(Cow::Owned(inv_list))
    }

    fn from_inv_list(inv_list: Cow<'static, [u32]>) -> Self
    {
        let size = inv_list.chunks_exact(2).map(|pair| pair[1] - pair[0]).sum();

        Self { inv_list, size }
    }
}

impl From<InversionListData<'static>> for CodePointInversionList
{
    fn from(source: InversionListData<'static>) -> Self
    {
        Self::from_inv_list(Cow::Borrowed(source.inv_list))
    }
}

impl From<&'static [u32]> for CodePointInversionList
{
    fn from(inv_list: &'static [u32]) -> Self
    {
        Self::from_inv_list(Cow::Borrowed(inv_list))
    }
}
