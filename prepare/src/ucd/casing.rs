use std::collections::BTreeMap;

use super::{parse_codes, UcdError, UcdFile, UnicodeData};

/// полные отображения регистра: UnicodeData + безусловные правила SpecialCasing + CaseFolding (C, F)
#[derive(Debug, Clone, Default)]
pub struct CaseMappings
{
    pub lowercase: BTreeMap<u32, Vec<u32>>,
    pub uppercase: BTreeMap<u32, Vec<u32>>,
    pub titlecase: BTreeMap<u32, Vec<u32>>,
    pub casefold: BTreeMap<u32, Vec<u32>>,
}

impl CaseMappings
{
    pub fn new(unicode_data: &UnicodeData, special_casing: &UcdFile, case_folding: &UcdFile) -> Result<Self, UcdError>
    {
        let mut mappings = Self::default();

        for (&code, codepoint) in unicode_data.codepoints.iter() {
            if let Some(lower) = codepoint.simple_lowercase {
                mappings.lowercase.insert(code, vec![lower]);
            }
            if let Some(upper) = codepoint.simple_uppercase {
                mappings.uppercase.insert(code, vec![upper]);
            }
            // пустое поле титульного регистра совпадает с верхним
            if let Some(title) = codepoint.simple_titlecase.or(codepoint.simple_uppercase) {
                mappings.titlecase.insert(code, vec![title]);
            }
        }

        // код; нижний; титульный; верхний; (условие;)
        for entry in special_casing.entries.iter() {
            if !entry.field(3).is_empty() {
                continue;
            }

            let code = *entry.range.start();

            for (field, table) in [
                (0, &mut mappings.lowercase),
                (1, &mut mappings.titlecase),
                (2, &mut mappings.uppercase),
            ] {
                table.insert(code, codes(special_casing, entry.field(field))?);
            }
        }

        // код; статус; отображение
        for entry in case_folding.entries.iter() {
            if let "C" | "F" = entry.field(0) {
                mappings
                    .casefold
                    .insert(*entry.range.start(), codes(case_folding, entry.field(1))?);
            }
        }

        Ok(mappings)
    }

    /// Case_Sensitive: источники и результаты всех отображений, меняющих кодпоинт
    pub fn case_sensitive(&self) -> Vec<bool>
    {
        let mut flags = vec![false; 0x110000];

        let tables = [&self.lowercase, &self.uppercase, &self.titlecase, &self.casefold];

        for (&code, target) in tables.iter().flat_map(|table| table.iter()) {
            if target.as_slice() == [code] {
                continue;
            }

            for &c in std::iter::once(&code).chain(target.iter()) {
                if let Some(flag) = flags.get_mut(c as usize) {
                    *flag = true;
                }
            }
        }

        flags
    }
}

fn codes(file: &UcdFile, field: &str) -> Result<Vec<u32>, UcdError>
{
    parse_codes(field).ok_or_else(|| UcdError::UnknownValue {
        file: file.name.clone(),
        value: field.to_owned(),
    })
}
