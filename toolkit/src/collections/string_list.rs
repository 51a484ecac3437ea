use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// отсортированный (побайтово) список строк, упакованных в одну строку. ends - смещения концов строк
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringList
{
    strings: Cow<'static, str>,
    ends: Cow<'static, [u32]>,
}

impl StringList
{
    pub fn new(strings: Cow<'static, str>, ends: Cow<'static, [u32]>) -> Self
    {
        Self { strings, ends }
    }

    /// список из произвольных строк, сортирует и удаляет повторы
    pub fn from_strings<S: AsRef<str>>(strings: impl IntoIterator<Item = S>) -> Self
    {
        let mut strings: Vec<String> = strings.into_iter().map(|s| s.as_ref().to_owned()).collect();
        strings.sort_unstable();
        strings.dedup();

        let mut packed = String::new();
        let mut ends = Vec::with_capacity(strings.len());

        for string in strings.iter() {
            packed.push_str(string);
            ends.push(packed.len() as u32);
        }

        Self::new(Cow::Owned(packed), Cow::Owned(ends))
    }

    pub fn len(&self) -> usize
    {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.ends.is_empty()
    }

    /// строка по индексу
    pub fn get(&self, index: usize) -> Option<&str>
    {
        let end = *self.ends.get(index)? as usize;
        let start = match index {
            0 => 0,
            _ => *self.ends.get(index - 1)? as usize,
        };

        self.strings.get(start .. end)
    }

    /// индекс строки в списке
    pub fn binary_search(&self, needle: &str) -> Result<usize, usize>
    {
        let (mut low, mut high) = (0, self.len());

        while low < high {
            let middle = low + (high - low) / 2;

            match self.get(middle).map(|s| s.as_bytes().cmp(needle.as_bytes())) {
                Some(Ordering::Less) => low = middle + 1,
                Some(Ordering::Greater) => high = middle,
                Some(Ordering::Equal) => return Ok(middle),
                None => return Err(low),
            }
        }

        Err(low)
    }

    pub fn contains(&self, needle: &str) -> bool
    {
        self.binary_search(needle).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_
    {
        (0 .. self.len()).filter_map(move |i| self.get(i))
    }

    /// размер упакованных строк в байтах
    pub fn bytes_len(&self) -> usize
    {
        self.strings.len()
    }
}
