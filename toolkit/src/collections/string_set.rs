use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::inversion_list::CodePointInversionList;
use super::string_list::StringList;
use crate::data::StringSetData;

/// множество кодпоинтов и строк
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePointInversionListAndStringList
{
    code_points: CodePointInversionList,
    strings: StringList,
}

impl CodePointInversionListAndStringList
{
    pub fn new(code_points: CodePointInversionList, strings: StringList) -> Self
    {
        Self {
            code_points,
            strings,
        }
    }

    /// строка целиком является элементом множества
    pub fn contains(&self, s: &str) -> bool
    {
        let mut chars = s.chars();

        if let (Some(c), None) = (chars.next(), chars.next()) {
            if self.code_points.contains(c) {
                return true;
            }
        }

        self.strings.contains(s)
    }

    #[inline]
    pub fn contains32(&self, code: u32) -> bool
    {
        self.code_points.contains32(code)
    }

    #[inline]
    pub fn contains_char(&self, c: char) -> bool
    {
        self.code_points.contains(c)
    }

    pub fn code_points(&self) -> &CodePointInversionList
    {
        &self.code_points
    }

    pub fn strings(&self) -> &StringList
    {
        &self.strings
    }
}

impl From<&StringSetData<'static>> for CodePointInversionListAndStringList
{
    fn from(source: &StringSetData<'static>) -> Self
    {
        Self {
            code_points: CodePointInversionList::from(source.inv_list),
            strings: StringList::new(Cow::Borrowed(source.strings), Cow::Borrowed(source.ends)),
        }
    }
}
