use icu_properties::{maps, script, sets};
use unicode_toolkit::properties::{CodePointMapData16, CodePointMapData8, CodePointSetData, ScriptWithExtensions};
use unicode_toolkit::provider::BakedProvider;

/// кодпоинты, назначенные в Unicode 14.0: ICU4X собран по более поздней версии,
/// для добавленных позже символов значения расходятся
fn assigned() -> Vec<u32>
{
    let gc = CodePointMapData8::load_general_category(&BakedProvider).unwrap();

    (0 ..= 0x10FFFF).filter(|&code| gc.get32(code) != 0).collect()
}

/// первые различия для сообщения об ошибке
fn first(differences: &[u32]) -> Vec<String>
{
    differences.iter().take(20).map(|code| format!("U+{:04X}", code)).collect()
}

/// перечислимые свойства совпадают с ICU
#[test]
fn maps()
{
    let assigned = assigned();

    macro_rules! test {
        ($(($name: expr, $ours: expr, $icu: expr)),+ $(,)?) => {
            $(
                let ours = $ours.unwrap();
                let icu = $icu;

                let differences: Vec<u32> = assigned
                    .iter()
                    .copied()
                    .filter(|&code| ours.get32(code) as u32 != icu(code))
                    .collect();

                assert!(differences.is_empty(), "{}: {} различий, {:?}", $name, differences.len(), first(&differences));
            )+
        };
    }

    test!(
        ("gc", CodePointMapData8::load_general_category(&BakedProvider), |code: u32| maps::general_category().get32(code) as u32),
        ("bc", CodePointMapData8::load_bidi_class(&BakedProvider), |code: u32| maps::bidi_class().get32(code).0 as u32),
        ("ea", CodePointMapData8::load_east_asian_width(&BakedProvider), |code: u32| maps::east_asian_width().get32(code).0 as u32),
        ("hst", CodePointMapData8::load_hangul_syllable_type(&BakedProvider), |code: u32| maps::hangul_syllable_type().get32(code).0 as u32),
        ("insc", CodePointMapData8::load_indic_syllabic_category(&BakedProvider), |code: u32| maps::indic_syllabic_category().get32(code).0 as u32),
        ("gcb", CodePointMapData8::load_grapheme_cluster_break(&BakedProvider), |code: u32| maps::grapheme_cluster_break().get32(code).0 as u32),
        ("wb", CodePointMapData8::load_word_break(&BakedProvider), |code: u32| maps::word_break().get32(code).0 as u32),
        ("sb", CodePointMapData8::load_sentence_break(&BakedProvider), |code: u32| maps::sentence_break().get32(code).0 as u32),
        ("jt", CodePointMapData8::load_joining_type(&BakedProvider), |code: u32| maps::joining_type().get32(code).0 as u32),
        ("ccc", CodePointMapData8::load_canonical_combining_class(&BakedProvider), |code: u32| maps::canonical_combining_class().get32(code).0 as u32),
        ("sc", CodePointMapData16::load_script(&BakedProvider), |code: u32| maps::script().get32(code).0 as u32),
    );
}

/// Line_Break совпадает с ICU, кроме классов, появившихся после 14.0
#[test]
fn line_break()
{
    let ours = CodePointMapData8::load_line_break(&BakedProvider).unwrap();
    let icu = maps::line_break();

    let differences: Vec<u32> = assigned()
        .into_iter()
        .filter(|&code| {
            let (ours, icu) = (ours.get32(code), icu.get32(code).0);

            // AK, AP, AS, VF, VI и ID у цифр в 14.0 - AL, CM, NU
            let newer = (43 ..= 47).contains(&icu) || (icu == 14 && ours == 19);

            !newer && ours != icu
        })
        .collect();

    assert!(differences.is_empty(), "{} различий, {:?}", differences.len(), first(&differences));
}

/// двоичные свойства совпадают с ICU
#[test]
fn binary()
{
    let assigned = assigned();

    macro_rules! test {
        ($(($ours: ident, $icu: ident)),+ $(,)?) => {
            $(
                let ours = CodePointSetData::$ours(&BakedProvider).unwrap();
                let icu = sets::$icu();

                let differences: Vec<u32> = assigned
                    .iter()
                    .copied()
                    .filter(|&code| ours.contains32(code) != icu.contains32(code))
                    .collect();

                assert!(
                    differences.is_empty(),
                    "{}: {} различий, {:?}",
                    stringify!($icu),
                    differences.len(),
                    first(&differences)
                );
            )+
        };
    }

    test!(
        (load_ascii_hex_digit, ascii_hex_digit),
        (load_alnum, alnum),
        (load_alphabetic, alphabetic),
        (load_bidi_control, bidi_control),
        (load_bidi_mirrored, bidi_mirrored),
        (load_blank, blank),
        (load_cased, cased),
        (load_case_ignorable, case_ignorable),
        (load_full_composition_exclusion, full_composition_exclusion),
        (load_changes_when_casefolded, changes_when_casefolded),
        (load_changes_when_casemapped, changes_when_casemapped),
        (load_changes_when_nfkc_casefolded, changes_when_nfkc_casefolded),
        (load_changes_when_lowercased, changes_when_lowercased),
        (load_changes_when_titlecased, changes_when_titlecased),
        (load_changes_when_uppercased, changes_when_uppercased),
        (load_dash, dash),
        (load_deprecated, deprecated),
        (load_default_ignorable_code_point, default_ignorable_code_point),
        (load_diacritic, diacritic),
        (load_emoji_modifier_base, emoji_modifier_base),
        (load_emoji_component, emoji_component),
        (load_emoji_modifier, emoji_modifier),
        (load_emoji, emoji),
        (load_emoji_presentation, emoji_presentation),
        (load_extender, extender),
        (load_extended_pictographic, extended_pictographic),
        (load_graph, graph),
        (load_grapheme_base, grapheme_base),
        (load_grapheme_extend, grapheme_extend),
        (load_grapheme_link, grapheme_link),
        (load_hex_digit, hex_digit),
        (load_hyphen, hyphen),
        (load_id_continue, id_continue),
        (load_ideographic, ideographic),
        (load_id_start, id_start),
        (load_ids_binary_operator, ids_binary_operator),
        (load_ids_trinary_operator, ids_trinary_operator),
        (load_join_control, join_control),
        (load_logical_order_exception, logical_order_exception),
        (load_lowercase, lowercase),
        (load_math, math),
        (load_noncharacter_code_point, noncharacter_code_point),
        (load_nfc_inert, nfc_inert),
        (load_nfd_inert, nfd_inert),
        (load_nfkc_inert, nfkc_inert),
        (load_nfkd_inert, nfkd_inert),
        (load_pattern_syntax, pattern_syntax),
        (load_pattern_white_space, pattern_white_space),
        (load_prepended_concatenation_mark, prepended_concatenation_mark),
        (load_print, print),
        (load_quotation_mark, quotation_mark),
        (load_radical, radical),
        (load_regional_indicator, regional_indicator),
        (load_soft_dotted, soft_dotted),
        (load_segment_starter, segment_starter),
        (load_case_sensitive, case_sensitive),
        (load_sentence_terminal, sentence_terminal),
        (load_terminal_punctuation, terminal_punctuation),
        (load_unified_ideograph, unified_ideograph),
        (load_uppercase, uppercase),
        (load_variation_selector, variation_selector),
        (load_white_space, white_space),
        (load_xdigit, xdigit),
        (load_xid_continue, xid_continue),
        (load_xid_start, xid_start),
    );
}

/// свойства, заданные и для неназначенных кодпоинтов, совпадают целиком
#[test]
fn whole_range()
{
    macro_rules! test {
        ($(($ours: ident, $icu: ident)),+ $(,)?) => {
            $(
                let ours = CodePointSetData::$ours(&BakedProvider).unwrap();
                let icu = sets::$icu();

                let differences: Vec<u32> = (0 ..= 0x10FFFF)
                    .filter(|&code| ours.contains32(code) != icu.contains32(code))
                    .collect();

                assert!(differences.is_empty(), "{}: {:?}", stringify!($icu), first(&differences));
            )+
        };
    }

    test!(
        (load_extended_pictographic, extended_pictographic),
        (load_default_ignorable_code_point, default_ignorable_code_point),
        (load_noncharacter_code_point, noncharacter_code_point),
        (load_pattern_syntax, pattern_syntax),
        (load_pattern_white_space, pattern_white_space),
    );
}

/// Script_Extensions: у ICU набор без основной письменности, если она Common или Inherited
#[test]
fn script_extensions()
{
    let ours = ScriptWithExtensions::load(&BakedProvider).unwrap();
    let icu = script::script_with_extensions();

    for code in assigned() {
        assert_eq!(ours.get_script_val(code).0, icu.get_script_val(code).0, "U+{:04X}", code);

        let mut expected: Vec<u16> = icu
            .get_script_extensions_val(code)
            .iter()
            .map(|script| script.0)
            .chain([icu.get_script_val(code).0])
            .collect();
        expected.sort_unstable();
        expected.dedup();

        let mut actual: Vec<u16> = ours.get_script_extensions_val(code).iter().map(|script| script.0).collect();
        actual.sort_unstable();

        assert_eq!(actual, expected, "U+{:04X}", code);
    }
}
