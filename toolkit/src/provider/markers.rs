//! маркеры данных. для каждого маркера: путь, способ адресации, структура данных и источник запечённых данных

use super::{AnyPayload, DataMarker, DataMarkerInfo, DataRequest};
use crate::collections::{CodePointInversionList, CodePointInversionListAndStringList, CodePointTrie, StringList};
use crate::data;
use crate::error::{DataError, DataErrorKind};
use crate::normalizer::{CompositionTable, DecompositionTables};
use crate::properties::{PropertyValueNames, ScriptWithExtensionsTables};
use crate::segmenter::LstmModel;

macro_rules! markers {
    ($(
        $(#[$meta:meta])*
        $kind:ident $name:ident: $path:literal => $ty:ty = $baked:expr;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl DataMarker for $name
            {
                type DataStruct = $ty;

                const INFO: DataMarkerInfo = DataMarkerInfo::$kind($path);
            }
        )*

        /// все известные маркеры
        pub const ALL: &[DataMarkerInfo] = &[$($name::INFO),*];

        /// поиск маркера по пути
        pub fn find(path: &str) -> Option<DataMarkerInfo>
        {
            ALL.iter().find(|marker| marker.path == path).copied()
        }

        /// запечённые данные маркера
        pub(crate) fn load_baked(marker: DataMarkerInfo, req: DataRequest) -> Result<AnyPayload, DataError>
        {
            match marker.path {
                $(
                    $path => {
                        let baked: fn(DataRequest) -> Option<$ty> = $baked;

                        match baked(req) {
                            Some(data) => Ok(AnyPayload::from_struct(data)),
                            None => Err(DataErrorKind::IdentifierNotFound.with_marker(marker)),
                        }
                    }
                )*
                _ => Err(DataErrorKind::MarkerNotFound.with_marker(marker)),
            }
        }

        /// сериализация данных маркера в postcard
        pub(crate) fn serialize_payload(marker: DataMarkerInfo, payload: AnyPayload) -> Result<Vec<u8>, DataError>
        {
            match marker.path {
                $(
                    $path => {
                        let data = payload.downcast::<$name>()?;
                        postcard::to_allocvec(&data).map_err(|e| DataError::from(e).with_marker(marker))
                    }
                )*
                _ => Err(DataErrorKind::MarkerNotFound.with_marker(marker)),
            }
        }
    };
}

/// запечённое множество из инверсионного списка
fn set(source: data::InversionListData<'static>) -> Option<CodePointInversionList>
{
    Some(source.into())
}

/// набор символов для локали из запечённой таблицы
fn exemplars(
    source: data::ExemplarsData<'static>,
    req: DataRequest,
) -> Option<CodePointInversionListAndStringList>
{
    let locale = req.locale.to_string();
    let index = source.locales.binary_search(&locale.as_str()).ok()?;

    source.sets.get(index).map(CodePointInversionListAndStringList::from)
}

/// локали, для которых есть запечённые наборы символов маркера
pub(crate) fn baked_exemplar_locales(marker: DataMarkerInfo) -> Vec<&'static str>
{
    let source = match marker.path {
        "props/exemplars/main@1" => data::unicodesets::exemplars_main(),
        "props/exemplars/auxiliary@1" => data::unicodesets::exemplars_auxiliary(),
        "props/exemplars/index@1" => data::unicodesets::exemplars_index(),
        "props/exemplars/numbers@1" => data::unicodesets::exemplars_numbers(),
        "props/exemplars/punctuation@1" => data::unicodesets::exemplars_punctuation(),
        _ => return vec![],
    };

    source.locales.to_vec()
}

/// имена запечённых словарей
pub(crate) fn baked_dictionaries() -> Vec<&'static str>
{
    vec!["cj", "thai"]
}

fn dictionary(req: DataRequest) -> Option<StringList>
{
    let source = match req.attributes {
        "thai" => data::segmenter::thai(),
        "cj" => data::segmenter::cj(),
        _ => return None,
    };

    Some(StringList::new(source.words.into(), source.ends.into()))
}

markers! {
    // карты свойств
    singleton GeneralCategoryV1: "props/gc@1" => CodePointTrie<u8> = |_| Some(data::maps::gc().into());
    singleton BidiClassV1: "props/bc@1" => CodePointTrie<u8> = |_| Some(data::maps::bc().into());
    singleton EastAsianWidthV1: "props/ea@1" => CodePointTrie<u8> = |_| Some(data::maps::ea().into());
    singleton HangulSyllableTypeV1: "props/hst@1" => CodePointTrie<u8> = |_| Some(data::maps::hst().into());
    singleton IndicSyllabicCategoryV1: "props/insc@1" => CodePointTrie<u8> = |_| Some(data::maps::insc().into());
    singleton LineBreakV1: "props/lb@1" => CodePointTrie<u8> = |_| Some(data::maps::lb().into());
    singleton GraphemeClusterBreakV1: "props/gcb@1" => CodePointTrie<u8> = |_| Some(data::maps::gcb().into());
    singleton WordBreakV1: "props/wb@1" => CodePointTrie<u8> = |_| Some(data::maps::wb().into());
    singleton SentenceBreakV1: "props/sb@1" => CodePointTrie<u8> = |_| Some(data::maps::sb().into());
    singleton JoiningTypeV1: "props/jt@1" => CodePointTrie<u8> = |_| Some(data::maps::jt().into());
    singleton CanonicalCombiningClassV1: "props/ccc@1" => CodePointTrie<u8> = |_| Some(data::maps::ccc().into());
    singleton ScriptV1: "props/sc@1" => CodePointTrie<u16> = |_| Some(data::maps::sc().into());
    singleton ScriptWithExtensionsV1: "props/scx@1" => ScriptWithExtensionsTables = |_| Some(data::script::scx().into());

    // двоичные свойства
    singleton AsciiHexDigitV1: "props/ahex@1" => CodePointInversionList = |_| set(data::sets::ahex());
    singleton AlnumV1: "props/alnum@1" => CodePointInversionList = |_| set(data::sets::alnum());
    singleton AlphabeticV1: "props/alpha@1" => CodePointInversionList = |_| set(data::sets::alpha());
    singleton BidiControlV1: "props/bidi_c@1" => CodePointInversionList = |_| set(data::sets::bidi_c());
    singleton BidiMirroredV1: "props/bidi_m@1" => CodePointInversionList = |_| set(data::sets::bidi_m());
    singleton BlankV1: "props/blank@1" => CodePointInversionList = |_| set(data::sets::blank());
    singleton CasedV1: "props/cased@1" => CodePointInversionList = |_| set(data::sets::cased());
    singleton CaseIgnorableV1: "props/ci@1" => CodePointInversionList = |_| set(data::sets::ci());
    singleton FullCompositionExclusionV1: "props/comp_ex@1" => CodePointInversionList = |_| set(data::sets::comp_ex());
    singleton ChangesWhenCasefoldedV1: "props/cwcf@1" => CodePointInversionList = |_| set(data::sets::cwcf());
    singleton ChangesWhenCasemappedV1: "props/cwcm@1" => CodePointInversionList = |_| set(data::sets::cwcm());
    singleton ChangesWhenNfkcCasefoldedV1: "props/cwkcf@1" => CodePointInversionList = |_| set(data::sets::cwkcf());
    singleton ChangesWhenLowercasedV1: "props/cwl@1" => CodePointInversionList = |_| set(data::sets::cwl());
    singleton ChangesWhenTitlecasedV1: "props/cwt@1" => CodePointInversionList = |_| set(data::sets::cwt());
    singleton ChangesWhenUppercasedV1: "props/cwu@1" => CodePointInversionList = |_| set(data::sets::cwu());
    singleton DashV1: "props/dash@1" => CodePointInversionList = |_| set(data::sets::dash());
    singleton DeprecatedV1: "props/dep@1" => CodePointInversionList = |_| set(data::sets::dep());
    singleton DefaultIgnorableCodePointV1: "props/di@1" => CodePointInversionList = |_| set(data::sets::di());
    singleton DiacriticV1: "props/dia@1" => CodePointInversionList = |_| set(data::sets::dia());
    singleton EmojiModifierBaseV1: "props/ebase@1" => CodePointInversionList = |_| set(data::sets::ebase());
    singleton EmojiComponentV1: "props/ecomp@1" => CodePointInversionList = |_| set(data::sets::ecomp());
    singleton EmojiModifierV1: "props/emod@1" => CodePointInversionList = |_| set(data::sets::emod());
    singleton EmojiV1: "props/emoji@1" => CodePointInversionList = |_| set(data::sets::emoji());
    singleton EmojiPresentationV1: "props/epres@1" => CodePointInversionList = |_| set(data::sets::epres());
    singleton ExtenderV1: "props/ext@1" => CodePointInversionList = |_| set(data::sets::ext());
    singleton ExtendedPictographicV1: "props/extpict@1" => CodePointInversionList = |_| set(data::sets::extpict());
    singleton GraphV1: "props/graph@1" => CodePointInversionList = |_| set(data::sets::graph());
    singleton GraphemeBaseV1: "props/gr_base@1" => CodePointInversionList = |_| set(data::sets::gr_base());
    singleton GraphemeExtendV1: "props/gr_ext@1" => CodePointInversionList = |_| set(data::sets::gr_ext());
    singleton GraphemeLinkV1: "props/gr_link@1" => CodePointInversionList = |_| set(data::sets::gr_link());
    singleton HexDigitV1: "props/hex@1" => CodePointInversionList = |_| set(data::sets::hex());
    singleton HyphenV1: "props/hyphen@1" => CodePointInversionList = |_| set(data::sets::hyphen());
    singleton IdContinueV1: "props/idc@1" => CodePointInversionList = |_| set(data::sets::idc());
    singleton IdeographicV1: "props/ideo@1" => CodePointInversionList = |_| set(data::sets::ideo());
    singleton IdStartV1: "props/ids@1" => CodePointInversionList = |_| set(data::sets::ids());
    singleton IdsBinaryOperatorV1: "props/idsb@1" => CodePointInversionList = |_| set(data::sets::idsb());
    singleton IdsTrinaryOperatorV1: "props/idst@1" => CodePointInversionList = |_| set(data::sets::idst());
    singleton JoinControlV1: "props/join_c@1" => CodePointInversionList = |_| set(data::sets::join_c());
    singleton LogicalOrderExceptionV1: "props/loe@1" => CodePointInversionList = |_| set(data::sets::loe());
    singleton LowercaseV1: "props/lower@1" => CodePointInversionList = |_| set(data::sets::lower());
    singleton MathV1: "props/math@1" => CodePointInversionList = |_| set(data::sets::math());
    singleton NoncharacterCodePointV1: "props/nchar@1" => CodePointInversionList = |_| set(data::sets::nchar());
    singleton NfcInertV1: "props/nfc_inert@1" => CodePointInversionList = |_| set(data::sets::nfc_inert());
    singleton NfdInertV1: "props/nfd_inert@1" => CodePointInversionList = |_| set(data::sets::nfd_inert());
    singleton NfkcInertV1: "props/nfkc_inert@1" => CodePointInversionList = |_| set(data::sets::nfkc_inert());
    singleton NfkdInertV1: "props/nfkd_inert@1" => CodePointInversionList = |_| set(data::sets::nfkd_inert());
    singleton PatternSyntaxV1: "props/pat_syn@1" => CodePointInversionList = |_| set(data::sets::pat_syn());
    singleton PatternWhiteSpaceV1: "props/pat_ws@1" => CodePointInversionList = |_| set(data::sets::pat_ws());
    singleton PrependedConcatenationMarkV1: "props/pcm@1" => CodePointInversionList = |_| set(data::sets::pcm());
    singleton PrintV1: "props/print@1" => CodePointInversionList = |_| set(data::sets::print());
    singleton QuotationMarkV1: "props/qmark@1" => CodePointInversionList = |_| set(data::sets::qmark());
    singleton RadicalV1: "props/radical@1" => CodePointInversionList = |_| set(data::sets::radical());
    singleton RegionalIndicatorV1: "props/ri@1" => CodePointInversionList = |_| set(data::sets::ri());
    singleton SoftDottedV1: "props/sd@1" => CodePointInversionList = |_| set(data::sets::sd());
    singleton SegmentStarterV1: "props/segstart@1" => CodePointInversionList = |_| set(data::sets::segstart());
    singleton CaseSensitiveV1: "props/sensitive@1" => CodePointInversionList = |_| set(data::sets::sensitive());
    singleton SentenceTerminalV1: "props/sterm@1" => CodePointInversionList = |_| set(data::sets::sterm());
    singleton TerminalPunctuationV1: "props/term@1" => CodePointInversionList = |_| set(data::sets::term());
    singleton UnifiedIdeographV1: "props/uideo@1" => CodePointInversionList = |_| set(data::sets::uideo());
    singleton UppercaseV1: "props/upper@1" => CodePointInversionList = |_| set(data::sets::upper());
    singleton VariationSelectorV1: "props/vs@1" => CodePointInversionList = |_| set(data::sets::vs());
    singleton WhiteSpaceV1: "props/wspace@1" => CodePointInversionList = |_| set(data::sets::wspace());
    singleton XdigitV1: "props/xdigit@1" => CodePointInversionList = |_| set(data::sets::xdigit());
    singleton XidContinueV1: "props/xidc@1" => CodePointInversionList = |_| set(data::sets::xidc());
    singleton XidStartV1: "props/xids@1" => CodePointInversionList = |_| set(data::sets::xids());

    // множества со строками
    singleton BasicEmojiV1: "props/basic_emoji@1" => CodePointInversionListAndStringList =
        |_| Some((&data::unicodesets::basic_emoji()).into());
    locale ExemplarsMainV1: "props/exemplars/main@1" => CodePointInversionListAndStringList =
        |req| exemplars(data::unicodesets::exemplars_main(), req);
    locale ExemplarsAuxiliaryV1: "props/exemplars/auxiliary@1" => CodePointInversionListAndStringList =
        |req| exemplars(data::unicodesets::exemplars_auxiliary(), req);
    locale ExemplarsIndexV1: "props/exemplars/index@1" => CodePointInversionListAndStringList =
        |req| exemplars(data::unicodesets::exemplars_index(), req);
    locale ExemplarsNumbersV1: "props/exemplars/numbers@1" => CodePointInversionListAndStringList =
        |req| exemplars(data::unicodesets::exemplars_numbers(), req);
    locale ExemplarsPunctuationV1: "props/exemplars/punctuation@1" => CodePointInversionListAndStringList =
        |req| exemplars(data::unicodesets::exemplars_punctuation(), req);

    // имена значений свойств
    singleton GeneralCategoryNamesV1: "propnames/gc@1" => PropertyValueNames = |_| Some(data::names::gc().into());
    singleton GeneralCategoryMaskNamesV1: "propnames/gcm@1" => PropertyValueNames = |_| Some(data::names::gc_mask().into());
    singleton BidiClassNamesV1: "propnames/bc@1" => PropertyValueNames = |_| Some(data::names::bc().into());
    singleton EastAsianWidthNamesV1: "propnames/ea@1" => PropertyValueNames = |_| Some(data::names::ea().into());
    singleton HangulSyllableTypeNamesV1: "propnames/hst@1" => PropertyValueNames = |_| Some(data::names::hst().into());
    singleton IndicSyllabicCategoryNamesV1: "propnames/insc@1" => PropertyValueNames = |_| Some(data::names::insc().into());
    singleton LineBreakNamesV1: "propnames/lb@1" => PropertyValueNames = |_| Some(data::names::lb().into());
    singleton GraphemeClusterBreakNamesV1: "propnames/gcb@1" => PropertyValueNames = |_| Some(data::names::gcb().into());
    singleton WordBreakNamesV1: "propnames/wb@1" => PropertyValueNames = |_| Some(data::names::wb().into());
    singleton SentenceBreakNamesV1: "propnames/sb@1" => PropertyValueNames = |_| Some(data::names::sb().into());
    singleton JoiningTypeNamesV1: "propnames/jt@1" => PropertyValueNames = |_| Some(data::names::jt().into());
    singleton CanonicalCombiningClassNamesV1: "propnames/ccc@1" => PropertyValueNames = |_| Some(data::names::ccc().into());
    singleton ScriptNamesV1: "propnames/sc@1" => PropertyValueNames = |_| Some(data::names::sc().into());

    // нормализация
    singleton NfdTablesV1: "normalizer/nfd@1" => DecompositionTables = |_| Some(data::normalizer::nfd().into());
    singleton NfkdTablesV1: "normalizer/nfkd@1" => DecompositionTables = |_| Some(data::normalizer::nfkd().into());
    singleton CompositionsV1: "normalizer/comp@1" => CompositionTable = |_| Some(data::normalizer::compositions().into());

    // сегментация
    /// словари для письменностей без пробелов между словами: thai, cj
    attributes DictionaryV1: "segmenter/dictionary@1" => StringList = dictionary;
    /// LSTM-модели; запечённых моделей нет
    attributes LstmV1: "segmenter/lstm@1" => LstmModel = |_| None;
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::provider::DataLocale;

    #[test]
    fn paths_unique()
    {
        let mut paths: Vec<_> = ALL.iter().map(|m| m.path).collect();
        paths.sort_unstable();
        paths.dedup();

        assert_eq!(paths.len(), ALL.len());
        assert_eq!(find("props/gc@1"), Some(GeneralCategoryV1::INFO));
        assert_eq!(find("props/nope@1"), None);
    }

    #[test]
    fn baked()
    {
        let locale: DataLocale = "cs".parse().unwrap();

        assert!(load_baked(ExemplarsMainV1::INFO, DataRequest::for_locale(&locale)).is_ok());
        assert!(load_baked(DictionaryV1::INFO, DataRequest::for_attributes("thai")).is_ok());

        let error = load_baked(LstmV1::INFO, DataRequest::for_attributes("Thai_codepoints_exclusive_model4_heavy"))
            .unwrap_err();
        assert_eq!(error.kind, DataErrorKind::IdentifierNotFound);

        let error = load_baked(DataMarkerInfo::singleton("props/nope@1"), DataRequest::default()).unwrap_err();
        assert_eq!(error.kind, DataErrorKind::MarkerNotFound);
    }

    #[test]
    fn serialize()
    {
        let payload = load_baked(AsciiHexDigitV1::INFO, DataRequest::default()).unwrap();
        let bytes = serialize_payload(AsciiHexDigitV1::INFO, payload).unwrap();
        let set = AnyPayload::from_bytes(bytes).downcast::<AsciiHexDigitV1>().unwrap();

        assert!(set.contains('A'));
        assert!(!set.contains('৩'));
    }
}
