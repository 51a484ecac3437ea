//! значения перечислимых свойств в виде прозрачных обёрток над числом

use serde::{Deserialize, Serialize};

macro_rules! property_value {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) {
            $($konst:ident = $value:expr,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub $repr);

        #[allow(non_upper_case_globals)]
        impl $name
        {
            $(pub const $konst: Self = Self($value);)*

            /// числовое значение
            #[inline(always)]
            pub const fn to_raw(self) -> $repr
            {
                self.0
            }
        }

        impl From<$repr> for $name
        {
            #[inline(always)]
            fn from(value: $repr) -> Self
            {
                Self(value)
            }
        }

        impl From<$name> for $repr
        {
            #[inline(always)]
            fn from(value: $name) -> Self
            {
                value.0
            }
        }
    };
}

property_value! {
    /// общая категория (General_Category)
    GeneralCategory(u8) {
        Unassigned = 0,
        UppercaseLetter = 1,
        LowercaseLetter = 2,
        TitlecaseLetter = 3,
        ModifierLetter = 4,
        OtherLetter = 5,
        NonspacingMark = 6,
        EnclosingMark = 7,
        SpacingMark = 8,
        DecimalNumber = 9,
        LetterNumber = 10,
        OtherNumber = 11,
        SpaceSeparator = 12,
        LineSeparator = 13,
        ParagraphSeparator = 14,
        Control = 15,
        Format = 16,
        PrivateUse = 17,
        Surrogate = 18,
        DashPunctuation = 19,
        OpenPunctuation = 20,
        ClosePunctuation = 21,
        ConnectorPunctuation = 22,
        OtherPunctuation = 23,
        MathSymbol = 24,
        CurrencySymbol = 25,
        ModifierSymbol = 26,
        OtherSymbol = 27,
        InitialPunctuation = 28,
        FinalPunctuation = 29,
    }
}

/// маска группы общих категорий: бит N установлен, если категория N входит в группу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct GeneralCategoryGroup(pub u32);

#[allow(non_upper_case_globals)]
impl GeneralCategoryGroup
{
    /// Lu | Ll | Lt
    pub const CasedLetter: Self = Self(0x0E);
    /// L
    pub const Letter: Self = Self(0x3E);
    /// M
    pub const Mark: Self = Self(0x1C0);
    /// N
    pub const Number: Self = Self(0xE00);
    /// Z
    pub const Separator: Self = Self(0x7000);
    /// C
    pub const Other: Self = Self(0x78001);
    /// P
    pub const Punctuation: Self = Self(0x30F80000);
    /// S
    pub const Symbol: Self = Self(0xF000000);

    /// группа из одной категории
    pub const fn from_category(gc: GeneralCategory) -> Self
    {
        match gc.0 < 32 {
            true => Self(1 << gc.0),
            false => Self(0),
        }
    }

    pub const fn contains(self, gc: GeneralCategory) -> bool
    {
        Self::from_category(gc).0 & self.0 != 0
    }

    pub const fn union(self, other: Self) -> Self
    {
        Self(self.0 | other.0)
    }
}

impl From<GeneralCategory> for GeneralCategoryGroup
{
    fn from(gc: GeneralCategory) -> Self
    {
        Self::from_category(gc)
    }
}

property_value! {
    /// класс канонического комбинирования (Canonical_Combining_Class), 0 - стартер
    CanonicalCombiningClass(u8) {
        NotReordered = 0,
        Overlay = 1,
        HanReading = 6,
        Nukta = 7,
        KanaVoicing = 8,
        Virama = 9,
        AttachedBelowLeft = 200,
        AttachedBelow = 202,
        AttachedAbove = 214,
        AttachedAboveRight = 216,
        BelowLeft = 218,
        Below = 220,
        BelowRight = 222,
        Left = 224,
        Right = 226,
        AboveLeft = 228,
        Above = 230,
        AboveRight = 232,
        DoubleBelow = 233,
        DoubleAbove = 234,
        IotaSubscript = 240,
    }
}

property_value! {
    /// класс двунаправленного текста (Bidi_Class)
    BidiClass(u8) {
        LeftToRight = 0,
        RightToLeft = 1,
        EuropeanNumber = 2,
        EuropeanSeparator = 3,
        EuropeanTerminator = 4,
        ArabicNumber = 5,
        CommonSeparator = 6,
        ParagraphSeparator = 7,
        SegmentSeparator = 8,
        WhiteSpace = 9,
        OtherNeutral = 10,
        LeftToRightEmbedding = 11,
        LeftToRightOverride = 12,
        ArabicLetter = 13,
        RightToLeftEmbedding = 14,
        RightToLeftOverride = 15,
        PopDirectionalFormat = 16,
        NonspacingMark = 17,
        BoundaryNeutral = 18,
        FirstStrongIsolate = 19,
        LeftToRightIsolate = 20,
        RightToLeftIsolate = 21,
        PopDirectionalIsolate = 22,
    }
}

property_value! {
    /// ширина в восточноазиатской типографике (East_Asian_Width)
    EastAsianWidth(u8) {
        Neutral = 0,
        Ambiguous = 1,
        Halfwidth = 2,
        Fullwidth = 3,
        Narrow = 4,
        Wide = 5,
    }
}

property_value! {
    /// класс разрыва строки (Line_Break)
    LineBreak(u8) {
        Unknown = 0,
        Ambiguous = 1,
        Alphabetic = 2,
        BreakBoth = 3,
        BreakAfter = 4,
        BreakBefore = 5,
        MandatoryBreak = 6,
        ContingentBreak = 7,
        ClosePunctuation = 8,
        CombiningMark = 9,
        CarriageReturn = 10,
        Exclamation = 11,
        Glue = 12,
        Hyphen = 13,
        Ideographic = 14,
        Inseparable = 15,
        InfixNumeric = 16,
        LineFeed = 17,
        Nonstarter = 18,
        Numeric = 19,
        OpenPunctuation = 20,
        PostfixNumeric = 21,
        PrefixNumeric = 22,
        Quotation = 23,
        ComplexContext = 24,
        Surrogate = 25,
        Space = 26,
        BreakSymbols = 27,
        ZWSpace = 28,
        NextLine = 29,
        WordJoiner = 30,
        H2 = 31,
        H3 = 32,
        JL = 33,
        JT = 34,
        JV = 35,
        CloseParenthesis = 36,
        ConditionalJapaneseStarter = 37,
        HebrewLetter = 38,
        RegionalIndicator = 39,
        EBase = 40,
        EModifier = 41,
        ZWJ = 42,
        Aksara = 43,
        AksaraPrebase = 44,
        AksaraStart = 45,
        ViramaFinal = 46,
        Virama = 47,
    }
}

property_value! {
    /// класс границ графемных кластеров (Grapheme_Cluster_Break)
    GraphemeClusterBreak(u8) {
        Other = 0,
        Control = 1,
        CR = 2,
        Extend = 3,
        L = 4,
        LF = 5,
        LV = 6,
        LVT = 7,
        T = 8,
        V = 9,
        SpacingMark = 10,
        Prepend = 11,
        RegionalIndicator = 12,
        EBase = 13,
        EBaseGAZ = 14,
        EModifier = 15,
        GlueAfterZwj = 16,
        ZWJ = 17,
    }
}

property_value! {
    /// класс границ слов (Word_Break)
    WordBreak(u8) {
        Other = 0,
        ALetter = 1,
        Format = 2,
        Katakana = 3,
        MidLetter = 4,
        MidNum = 5,
        Numeric = 6,
        ExtendNumLet = 7,
        CR = 8,
        Extend = 9,
        LF = 10,
        MidNumLet = 11,
        Newline = 12,
        RegionalIndicator = 13,
        HebrewLetter = 14,
        SingleQuote = 15,
        DoubleQuote = 16,
        EBase = 17,
        EBaseGAZ = 18,
        EModifier = 19,
        GlueAfterZwj = 20,
        ZWJ = 21,
        WSegSpace = 22,
    }
}

property_value! {
    /// класс границ предложений (Sentence_Break)
    SentenceBreak(u8) {
        Other = 0,
        ATerm = 1,
        Close = 2,
        Format = 3,
        Lower = 4,
        Numeric = 5,
        OLetter = 6,
        Sep = 7,
        Sp = 8,
        STerm = 9,
        Upper = 10,
        CR = 11,
        Extend = 12,
        LF = 13,
        SContinue = 14,
    }
}

property_value! {
    /// тип слога хангыль (Hangul_Syllable_Type)
    HangulSyllableType(u8) {
        NotApplicable = 0,
        LeadingJamo = 1,
        VowelJamo = 2,
        TrailingJamo = 3,
        LVSyllable = 4,
        LVTSyllable = 5,
    }
}

property_value! {
    /// тип соединения (Joining_Type)
    JoiningType(u8) {
        NonJoining = 0,
        JoinCausing = 1,
        DualJoining = 2,
        LeftJoining = 3,
        RightJoining = 4,
        Transparent = 5,
    }
}

property_value! {
    /// слоговая категория индийских письменностей (Indic_Syllabic_Category)
    IndicSyllabicCategory(u8) {
        Other = 0,
        Avagraha = 1,
        Bindu = 2,
        BrahmiJoiningNumber = 3,
        CantillationMark = 4,
        Consonant = 5,
        ConsonantDead = 6,
        ConsonantFinal = 7,
        ConsonantHeadLetter = 8,
        ConsonantInitialPostfixed = 9,
        ConsonantKiller = 10,
        ConsonantMedial = 11,
        ConsonantPlaceholder = 12,
        ConsonantPrecedingRepha = 13,
        ConsonantPrefixed = 14,
        ConsonantSucceedingRepha = 15,
        ConsonantSubjoined = 16,
        ConsonantWithStacker = 17,
        GeminationMark = 18,
        InvisibleStacker = 19,
        Joiner = 20,
        ModifyingLetter = 21,
        NonJoiner = 22,
        Nukta = 23,
        Number = 24,
        NumberJoiner = 25,
        PureKiller = 26,
        RegisterShifter = 27,
        SyllableModifier = 28,
        ToneLetter = 29,
        ToneMark = 30,
        Virama = 31,
        Visarga = 32,
        Vowel = 33,
        VowelDependent = 34,
        VowelIndependent = 35,
        ReorderingKiller = 36,
    }
}

property_value! {
    /// письменность (Script)
    Script(u16) {
        Common = 0,
        Inherited = 1,
        Arabic = 2,
        Armenian = 3,
        Bengali = 4,
        Bopomofo = 5,
        Cherokee = 6,
        Coptic = 7,
        Cyrillic = 8,
        Deseret = 9,
        Devanagari = 10,
        Ethiopic = 11,
        Georgian = 12,
        Gothic = 13,
        Greek = 14,
        Gujarati = 15,
        Gurmukhi = 16,
        Han = 17,
        Hangul = 18,
        Hebrew = 19,
        Hiragana = 20,
        Kannada = 21,
        Katakana = 22,
        Khmer = 23,
        Lao = 24,
        Latin = 25,
        Malayalam = 26,
        Mongolian = 27,
        Myanmar = 28,
        Ogham = 29,
        OldItalic = 30,
        Oriya = 31,
        Runic = 32,
        Sinhala = 33,
        Syriac = 34,
        Tamil = 35,
        Telugu = 36,
        Thaana = 37,
        Thai = 38,
        Tibetan = 39,
        CanadianAboriginal = 40,
        Yi = 41,
        Tagalog = 42,
        Hanunoo = 43,
        Buhid = 44,
        Tagbanwa = 45,
        Braille = 46,
        Cypriot = 47,
        Limbu = 48,
        LinearB = 49,
        Osmanya = 50,
        Shavian = 51,
        TaiLe = 52,
        Ugaritic = 53,
        Buginese = 55,
        Glagolitic = 56,
        Kharoshthi = 57,
        SylotiNagri = 58,
        NewTaiLue = 59,
        Tifinagh = 60,
        OldPersian = 61,
        Balinese = 62,
        Batak = 63,
        Brahmi = 65,
        Cham = 66,
        EgyptianHieroglyphs = 71,
        PahawhHmong = 75,
        OldHungarian = 76,
        Javanese = 78,
        KayahLi = 79,
        Lepcha = 82,
        LinearA = 83,
        Mandaic = 84,
        MeroiticHieroglyphs = 86,
        Nko = 87,
        OldTurkic = 88,
        OldPermic = 89,
        PhagsPa = 90,
        Phoenician = 91,
        Miao = 92,
        Vai = 99,
        Cuneiform = 101,
        Unknown = 103,
        Carian = 104,
        TaiTham = 106,
        Lycian = 107,
        Lydian = 108,
        OlChiki = 109,
        Rejang = 110,
        Saurashtra = 111,
        SignWriting = 112,
        Sundanese = 113,
        MeeteiMayek = 115,
        ImperialAramaic = 116,
        Avestan = 117,
        Chakma = 118,
        Kaithi = 120,
        Manichaean = 121,
        InscriptionalPahlavi = 122,
        PsalterPahlavi = 123,
        InscriptionalParthian = 125,
        Samaritan = 126,
        TaiViet = 127,
        Bamum = 130,
        Lisu = 131,
        OldSouthArabian = 133,
        BassaVah = 134,
        Duployan = 135,
        Elbasan = 136,
        Grantha = 137,
        MendeKikakui = 140,
        MeroiticCursive = 141,
        OldNorthArabian = 142,
        Nabataean = 143,
        Palmyrene = 144,
        Khudawadi = 145,
        WarangCiti = 146,
        Mro = 149,
        Nushu = 150,
        Sharada = 151,
        SoraSompeng = 152,
        Takri = 153,
        Tangut = 154,
        AnatolianHieroglyphs = 156,
        Khojki = 157,
        Tirhuta = 158,
        CaucasianAlbanian = 159,
        Mahajani = 160,
        Ahom = 161,
        Hatran = 162,
        Modi = 163,
        Multani = 164,
        PauCinHau = 165,
        Siddham = 166,
        Adlam = 167,
        Bhaiksuki = 168,
        Marchen = 169,
        Newa = 170,
        Osage = 171,
        MasaramGondi = 175,
        Soyombo = 176,
        ZanabazarSquare = 177,
        Dogra = 178,
        GunjalaGondi = 179,
        Makasar = 180,
        Medefaidrin = 181,
        HanifiRohingya = 182,
        Sogdian = 183,
        OldSogdian = 184,
        Elymaic = 185,
        NyiakengPuachueHmong = 186,
        Nandinagari = 187,
        Wancho = 188,
        Chorasmian = 189,
        DivesAkuru = 190,
        KhitanSmallScript = 191,
        Yezidi = 192,
        CyproMinoan = 193,
        OldUyghur = 194,
        Tangsa = 195,
        Toto = 196,
        Vithkuqi = 197,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn groups()
    {
        let letter = [
            GeneralCategory::UppercaseLetter,
            GeneralCategory::LowercaseLetter,
            GeneralCategory::TitlecaseLetter,
            GeneralCategory::ModifierLetter,
            GeneralCategory::OtherLetter,
        ]
        .into_iter()
        .map(GeneralCategoryGroup::from)
        .fold(GeneralCategoryGroup::default(), GeneralCategoryGroup::union);

        assert_eq!(letter, GeneralCategoryGroup::Letter);
        assert!(GeneralCategoryGroup::Punctuation.contains(GeneralCategory::InitialPunctuation));
        assert!(!GeneralCategoryGroup::Symbol.contains(GeneralCategory::DecimalNumber));
        assert_eq!(GeneralCategoryGroup::from_category(GeneralCategory(40)).0, 0);
    }

    #[test]
    fn raw()
    {
        assert_eq!(Script::Brahmi.to_raw(), 65);
        assert_eq!(u8::from(LineBreak::ComplexContext), 24);
        assert_eq!(WordBreak::from(1), WordBreak::ALetter);
    }
}
