use crate::collections::{CodePointInversionList, CodePointRangeIterator};
use crate::error::{DataError, PropertiesError};
use crate::provider::markers::*;
use crate::provider::{load_singleton, DataMarker, DataProvider};

use super::maps::CodePointMapData8;

/// множество кодпоинтов двоичного свойства
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointSetData
{
    set: CodePointInversionList,
}

impl CodePointSetData
{
    pub fn from_inversion_list(set: CodePointInversionList) -> Self
    {
        Self { set }
    }

    /// входит ли кодпоинт в множество. любое 32-битное значение допустимо
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.set.contains32(code)
    }

    #[inline]
    pub fn contains32(&self, code: u32) -> bool
    {
        self.contains(code)
    }

    #[inline]
    pub fn contains_char(&self, c: char) -> bool
    {
        self.set.contains(c)
    }

    pub fn iter_ranges(&self) -> CodePointRangeIterator<'_>
    {
        CodePointRangeIterator::new(self.set.iter_ranges())
    }

    pub fn iter_ranges_complemented(&self) -> CodePointRangeIterator<'_>
    {
        CodePointRangeIterator::new(self.set.iter_ranges_complemented())
    }

    pub fn as_inversion_list(&self) -> &CodePointInversionList
    {
        &self.set
    }

    /// кодпоинты, категория которых входит в маску группы (см. GeneralCategoryGroup)
    pub fn load_for_general_category_group<P: DataProvider + ?Sized>(
        provider: &P,
        mask: u32,
    ) -> Result<Self, DataError>
    {
        let gc = CodePointMapData8::load_general_category(provider)?;

        Ok(Self::from_inversion_list(CodePointInversionList::from_ranges(
            gc.iter_ranges_for_mask(mask),
        )))
    }

    /// двоичное свойство по имени из ECMA-262 (короткому или длинному), регистр учитывается
    pub fn load_for_ecma262<P: DataProvider + ?Sized>(provider: &P, name: &str) -> Result<Self, PropertiesError>
    {
        macro_rules! ecma262 {
            ($($($name:literal)|+ => $fn:ident,)*) => {
                match name {
                    $($($name)|+ => Ok(Self::$fn(provider)?),)*
                    _ => Err(PropertiesError::PropertyNotFound(name.to_owned())),
                }
            };
        }

        ecma262! {
            "ASCII_Hex_Digit" | "AHex" => load_ascii_hex_digit,
            "Alphabetic" | "Alpha" => load_alphabetic,
            "Bidi_Control" | "Bidi_C" => load_bidi_control,
            "Bidi_Mirrored" | "Bidi_M" => load_bidi_mirrored,
            "Case_Ignorable" | "CI" => load_case_ignorable,
            "Cased" => load_cased,
            "Changes_When_Casefolded" | "CWCF" => load_changes_when_casefolded,
            "Changes_When_Casemapped" | "CWCM" => load_changes_when_casemapped,
            "Changes_When_Lowercased" | "CWL" => load_changes_when_lowercased,
            "Changes_When_NFKC_Casefolded" | "CWKCF" => load_changes_when_nfkc_casefolded,
            "Changes_When_Titlecased" | "CWT" => load_changes_when_titlecased,
            "Changes_When_Uppercased" | "CWU" => load_changes_when_uppercased,
            "Dash" => load_dash,
            "Default_Ignorable_Code_Point" | "DI" => load_default_ignorable_code_point,
            "Deprecated" | "Dep" => load_deprecated,
            "Diacritic" | "Dia" => load_diacritic,
            "Emoji" => load_emoji,
            "Emoji_Component" | "EComp" => load_emoji_component,
            "Emoji_Modifier" | "EMod" => load_emoji_modifier,
            "Emoji_Modifier_Base" | "EBase" => load_emoji_modifier_base,
            "Emoji_Presentation" | "EPres" => load_emoji_presentation,
            "Extended_Pictographic" | "ExtPict" => load_extended_pictographic,
            "Extender" | "Ext" => load_extender,
            "Grapheme_Base" | "Gr_Base" => load_grapheme_base,
            "Grapheme_Extend" | "Gr_Ext" => load_grapheme_extend,
            "Hex_Digit" | "Hex" => load_hex_digit,
            "IDS_Binary_Operator" | "IDSB" => load_ids_binary_operator,
            "IDS_Trinary_Operator" | "IDST" => load_ids_trinary_operator,
            "ID_Continue" | "IDC" => load_id_continue,
            "ID_Start" | "IDS" => load_id_start,
            "Ideographic" | "Ideo" => load_ideographic,
            "Join_Control" | "Join_C" => load_join_control,
            "Logical_Order_Exception" | "LOE" => load_logical_order_exception,
            "Lowercase" | "Lower" => load_lowercase,
            "Math" => load_math,
            "Noncharacter_Code_Point" | "NChar" => load_noncharacter_code_point,
            "Pattern_Syntax" | "Pat_Syn" => load_pattern_syntax,
            "Pattern_White_Space" | "Pat_WS" => load_pattern_white_space,
            "Quotation_Mark" | "QMark" => load_quotation_mark,
            "Radical" => load_radical,
            "Regional_Indicator" | "RI" => load_regional_indicator,
            "Sentence_Terminal" | "STerm" => load_sentence_terminal,
            "Soft_Dotted" | "SD" => load_soft_dotted,
            "Terminal_Punctuation" | "Term" => load_terminal_punctuation,
            "Unified_Ideograph" | "UIdeo" => load_unified_ideograph,
            "Uppercase" | "Upper" => load_uppercase,
            "Variation_Selector" | "VS" => load_variation_selector,
            "White_Space" | "space" => load_white_space,
            "XID_Continue" | "XIDC" => load_xid_continue,
            "XID_Start" | "XIDS" => load_xid_start,
        }
    }

    fn load<M, P>(provider: &P) -> Result<Self, DataError>
    where
        M: DataMarker<DataStruct = CodePointInversionList>,
        P: DataProvider + ?Sized,
    {
        Ok(Self::from_inversion_list(load_singleton::<M, P>(provider)?))
    }
}

macro_rules! set_loaders {
    ($($fn:ident => $marker:ty;)*) => {
        impl CodePointSetData
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

set_loaders! {
    load_ascii_hex_digit => AsciiHexDigitV1;
    load_alnum => AlnumV1;
    load_alphabetic => AlphabeticV1;
    load_bidi_control => BidiControlV1;
    load_bidi_mirrored => BidiMirroredV1;
    load_blank => BlankV1;
    load_cased => CasedV1;
    load_case_ignorable => CaseIgnorableV1;
    load_full_composition_exclusion => FullCompositionExclusionV1;
    load_changes_when_casefolded => ChangesWhenCasefoldedV1;
    load_changes_when_casemapped => ChangesWhenCasemappedV1;
    load_changes_when_nfkc_casefolded => ChangesWhenNfkcCasefoldedV1;
    load_changes_when_lowercased => ChangesWhenLowercasedV1;
    load_changes_when_titlecased => ChangesWhenTitlecasedV1;
    load_changes_when_uppercased => ChangesWhenUppercasedV1;
    load_dash => DashV1;
    load_deprecated => DeprecatedV1;
    load_default_ignorable_code_point => DefaultIgnorableCodePointV1;
    load_diacritic => DiacriticV1;
    load_emoji_modifier_base => EmojiModifierBaseV1;
    load_emoji_component => EmojiComponentV1;
    load_emoji_modifier => EmojiModifierV1;
    load_emoji => EmojiV1;
    load_emoji_presentation => EmojiPresentationV1;
    load_extender => ExtenderV1;
    load_extended_pictographic => ExtendedPictographicV1;
    load_graph => GraphV1;
    load_grapheme_base => GraphemeBaseV1;
    load_grapheme_extend => GraphemeExtendV1;
    load_grapheme_link => GraphemeLinkV1;
    load_hex_digit => HexDigitV1;
    load_hyphen => HyphenV1;
    load_id_continue => IdContinueV1;
    load_ideographic => IdeographicV1;
    load_id_start => IdStartV1;
    load_ids_binary_operator => IdsBinaryOperatorV1;
    load_ids_trinary_operator => IdsTrinaryOperatorV1;
    load_join_control => JoinControlV1;
    load_logical_order_exception => LogicalOrderExceptionV1;
    load_lowercase => LowercaseV1;
    load_math => MathV1;
    load_noncharacter_code_point => NoncharacterCodePointV1;
    load_nfc_inert => NfcInertV1;
    load_nfd_inert => NfdInertV1;
    load_nfkc_inert => NfkcInertV1;
    load_nfkd_inert => NfkdInertV1;
    load_pattern_syntax => PatternSyntaxV1;
    load_pattern_white_space => PatternWhiteSpaceV1;
    load_prepended_concatenation_mark => PrependedConcatenationMarkV1;
    load_print => PrintV1;
    load_quotation_mark => QuotationMarkV1;
    load_radical => RadicalV1;
    load_regional_indicator => RegionalIndicatorV1;
    load_soft_dotted => SoftDottedV1;
    load_segment_starter => SegmentStarterV1;
    load_case_sensitive => CaseSensitiveV1;
    load_sentence_terminal => SentenceTerminalV1;
    load_terminal_punctuation => TerminalPunctuationV1;
    load_unified_ideograph => UnifiedIdeographV1;
    load_uppercase => UppercaseV1;
    load_variation_selector => VariationSelectorV1;
    load_white_space => WhiteSpaceV1;
    load_xdigit => XdigitV1;
    load_xid_continue => XidContinueV1;
    load_xid_start => XidStartV1;
}
