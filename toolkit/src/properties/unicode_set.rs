use crate::collections::CodePointInversionListAndStringList;
use crate::error::DataError;
use crate::provider::markers::*;
use crate::provider::{load, load_singleton, DataLocale, DataMarker, DataProvider, DataRequest};

/// множество кодпоинтов и строк: последовательности эмодзи, наборы символов локалей
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeSetData
{
    set: CodePointInversionListAndStringList,
}

impl UnicodeSetData
{
    pub fn from_set(set: CodePointInversionListAndStringList) -> Self
    {
        Self { set }
    }

    /// входит ли вся строка в множество: один символ ищется среди кодпоинтов, иначе - среди строк
    #[inline]
    pub fn contains(&self, s: &str) -> bool
    {
        self.set.contains(s)
    }

    #[inline]
    pub fn contains_char(&self, c: char) -> bool
    {
        self.set.contains_char(c)
    }

    #[inline]
    pub fn contains32(&self, code: u32) -> bool
    {
        self.set.contains32(code)
    }

    pub fn as_set(&self) -> &CodePointInversionListAndStringList
    {
        &self.set
    }

    /// Basic_Emoji: одиночные эмодзи и последовательности с U+FE0F
    pub fn load_basic_emoji<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self::from_set(load_singleton::<BasicEmojiV1, P>(provider)?))
    }

    fn load_exemplars<M, P>(provider: &P, locale: &DataLocale) -> Result<Self, DataError>
    where
        M: DataMarker<DataStruct = CodePointInversionListAndStringList>,
        P: DataProvider + ?Sized,
    {
        Ok(Self::from_set(load::<M, P>(provider, DataRequest::for_locale(locale))?))
    }
}

macro_rules! exemplar_loaders {
    ($($(#[$meta:meta])* $fn:ident => $marker:ty;)*) => {
        impl UnicodeSetData
        {
            $(
                $(#[$meta])*
                pub fn $fn<P: DataProvider + ?Sized>(provider: &P, locale: &DataLocale) -> Result<Self, DataError>
                {
                    Self::load_exemplars::<$marker, P>(provider, locale)
                }
            )*
        }
    };
}

exemplar_loaders! {
    /// основной набор символов письменности локали
    load_exemplars_main => ExemplarsMainV1;
    load_exemplars_auxiliary => ExemplarsAuxiliaryV1;
    load_exemplars_punctuation => ExemplarsPunctuationV1;
    load_exemplars_numbers => ExemplarsNumbersV1;
    /// символы алфавитного указателя
    load_exemplars_index => ExemplarsIndexV1;
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::provider::{BakedProvider, Provider};
    use crate::DataErrorKind;

    #[test]
    fn basic_emoji()
    {
        let emoji = UnicodeSetData::load_basic_emoji(&BakedProvider).unwrap();

        assert!(emoji.contains_char('🔥'));
        assert!(emoji.contains("🔥"));
        assert!(emoji.contains("\u{1F5FA}\u{FE0F}"));
        assert!(!emoji.contains_char('\u{1F5FA}'));
        assert!(!emoji.contains_char('a'));
        assert!(!emoji.contains(""));
    }

    #[test]
    fn exemplars()
    {
        let cs: DataLocale = "cs".parse().unwrap();
        let main = UnicodeSetData::load_exemplars_main(&BakedProvider, &cs).unwrap();

        assert!(main.contains("ch"));
        assert!(main.contains_char('ř'));

        let und = UnicodeSetData::load_exemplars_main(&BakedProvider, &DataLocale::default()).unwrap();
        assert!(und.contains_char('a'));
        assert!(!und.contains_char('ř'));

        let missing: DataLocale = "tlh".parse().unwrap();
        let error = UnicodeSetData::load_exemplars_main(&BakedProvider, &missing).unwrap_err();
        assert_eq!(error.kind, DataErrorKind::IdentifierNotFound);
    }

    #[test]
    fn exemplars_fallback()
    {
        let provider = Provider::compiled().enable_locale_fallback();
        let locale: DataLocale = "cs-CZ".parse().unwrap();

        let main = UnicodeSetData::load_exemplars_main(&provider, &locale).unwrap();
        assert!(main.contains("ch"));
    }
}
