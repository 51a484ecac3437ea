use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// некорректный идентификатор локали
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("некорректный идентификатор локали: {0}")]
pub struct LocaleParseError(pub String);

/// локаль для запроса данных: язык[-Скрипт][-РЕГИОН][-вариант...]. отсутствие языка - und
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct DataLocale
{
    language: Option<String>,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
}

/// корневая локаль для запросов, не зависящих от локали
pub static UND: DataLocale = DataLocale::UND;

impl DataLocale
{
    pub const UND: Self = Self {
        language: None,
        script: None,
        region: None,
        variants: Vec::new(),
    };

    pub fn language(&self) -> Option<&str>
    {
        self.language.as_deref()
    }

    pub fn script(&self) -> Option<&str>
    {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str>
    {
        self.region.as_deref()
    }

    pub fn variants(&self) -> &[String]
    {
        &self.variants
    }

    pub fn is_und(&self) -> bool
    {
        *self == Self::UND
    }

    /// та же локаль без вариантов
    pub fn without_variants(&self) -> Self
    {
        Self {
            variants: vec![],
            ..self.clone()
        }
    }

    /// та же локаль без региона
    pub fn without_region(&self) -> Self
    {
        Self {
            region: None,
            ..self.clone()
        }
    }

    /// та же локаль без скрипта
    pub fn without_script(&self) -> Self
    {
        Self {
            script: None,
            ..self.clone()
        }
    }
}

impl FromStr for DataLocale
{
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let error = || LocaleParseError(s.to_owned());

        if s.is_empty() {
            return Ok(Self::UND);
        }

        let mut subtags = s.split(['-', '_']).peekable();
        let mut locale = Self::UND;

        let language = match subtags.next().ok_or_else(error)? {
            // в CLDR root - корневая локаль
            root if root.eq_ignore_ascii_case("root") => "und",
            language => language,
        };
        let is_alpha = language.bytes().all(|b| b.is_ascii_alphabetic());

        match (language.len(), is_alpha) {
            (2 ..= 3, true) | (5 ..= 8, true) => {
                let language = language.to_ascii_lowercase();

                if language != "und" {
                    locale.language = Some(language);
                }
            }
            _ => return Err(error()),
        }

        if let Some(script) = subtags.next_if(|t| t.len() == 4 && t.bytes().all(|b| b.is_ascii_alphabetic())) {
            let mut script = script.to_ascii_lowercase();
            script[.. 1].make_ascii_uppercase();
            locale.script = Some(script);
        }

        let is_region = |t: &&str| match t.len() {
            2 => t.bytes().all(|b| b.is_ascii_alphabetic()),
            3 => t.bytes().all(|b| b.is_ascii_digit()),
            _ => false,
        };

        if let Some(region) = subtags.next_if(is_region) {
            locale.region = Some(region.to_ascii_uppercase());
        }

        for subtag in subtags {
            let is_alnum = subtag.bytes().all(|b| b.is_ascii_alphanumeric());
            let starts_with_digit = subtag.bytes().next().map_or(false, |b| b.is_ascii_digit());

            match (subtag.len(), is_alnum) {
                (5 ..= 8, true) => locale.variants.push(subtag.to_ascii_lowercase()),
                (4, true) if starts_with_digit => locale.variants.push(subtag.to_ascii_lowercase()),
                // расширения (-u-, -x- и т.д.) на выбор данных не влияют
                (1, true) => break,
                _ => return Err(error()),
            }
        }

        locale.variants.sort();
        locale.variants.dedup();

        Ok(locale)
    }
}

impl fmt::Display for DataLocale
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.language.as_deref().unwrap_or("und"))?;

        for subtag in self.script.iter().chain(self.region.iter()).chain(self.variants.iter()) {
            write!(f, "-{}", subtag)?;
        }

        Ok(())
    }
}
