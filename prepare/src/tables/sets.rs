use std::collections::HashMap;

use log::{info, warn};
use unicode_toolkit::properties::GeneralCategory;

use crate::output::Output;
use crate::ucd::*;

use super::maps::property_values;
use super::{Normalization, CODEPOINTS};

/// двоичные свойства, перечисленные в файлах UCD: таблица в props/sets, файл и имя свойства
const BINARY: &[(&str, &str, &str)] = &[
    ("ahex", PROP_LIST, "ASCII_Hex_Digit"),
    ("bidi_c", PROP_LIST, "Bidi_Control"),
    ("dash", PROP_LIST, "Dash"),
    ("dep", PROP_LIST, "Deprecated"),
    ("dia", PROP_LIST, "Diacritic"),
    ("ext", PROP_LIST, "Extender"),
    ("hex", PROP_LIST, "Hex_Digit"),
    ("hyphen", PROP_LIST, "Hyphen"),
    ("ideo", PROP_LIST, "Ideographic"),
    ("idsb", PROP_LIST, "IDS_Binary_Operator"),
    ("idst", PROP_LIST, "IDS_Trinary_Operator"),
    ("join_c", PROP_LIST, "Join_Control"),
    ("loe", PROP_LIST, "Logical_Order_Exception"),
    ("nchar", PROP_LIST, "Noncharacter_Code_Point"),
    ("pat_syn", PROP_LIST, "Pattern_Syntax"),
    ("pat_ws", PROP_LIST, "Pattern_White_Space"),
    ("pcm", PROP_LIST, "Prepended_Concatenation_Mark"),
    ("qmark", PROP_LIST, "Quotation_Mark"),
    ("radical", PROP_LIST, "Radical"),
    ("ri", PROP_LIST, "Regional_Indicator"),
    ("sd", PROP_LIST, "Soft_Dotted"),
    ("sterm", PROP_LIST, "Sentence_Terminal"),
    ("term", PROP_LIST, "Terminal_Punctuation"),
    ("uideo", PROP_LIST, "Unified_Ideograph"),
    ("vs", PROP_LIST, "Variation_Selector"),
    ("wspace", PROP_LIST, "White_Space"),
    ("alpha", DERIVED_CORE_PROPERTIES, "Alphabetic"),
    ("cased", DERIVED_CORE_PROPERTIES, "Cased"),
    ("ci", DERIVED_CORE_PROPERTIES, "Case_Ignorable"),
    ("cwcf", DERIVED_CORE_PROPERTIES, "Changes_When_Casefolded"),
    ("cwcm", DERIVED_CORE_PROPERTIES, "Changes_When_Casemapped"),
    ("cwl", DERIVED_CORE_PROPERTIES, "Changes_When_Lowercased"),
    ("cwt", DERIVED_CORE_PROPERTIES, "Changes_When_Titlecased"),
    ("cwu", DERIVED_CORE_PROPERTIES, "Changes_When_Uppercased"),
    ("di", DERIVED_CORE_PROPERTIES, "Default_Ignorable_Code_Point"),
    ("gr_base", DERIVED_CORE_PROPERTIES, "Grapheme_Base"),
    ("gr_ext", DERIVED_CORE_PROPERTIES, "Grapheme_Extend"),
    ("gr_link", DERIVED_CORE_PROPERTIES, "Grapheme_Link"),
    ("idc", DERIVED_CORE_PROPERTIES, "ID_Continue"),
    ("ids", DERIVED_CORE_PROPERTIES, "ID_Start"),
    ("lower", DERIVED_CORE_PROPERTIES, "Lowercase"),
    ("math", DERIVED_CORE_PROPERTIES, "Math"),
    ("upper", DERIVED_CORE_PROPERTIES, "Uppercase"),
    ("xidc", DERIVED_CORE_PROPERTIES, "XID_Continue"),
    ("xids", DERIVED_CORE_PROPERTIES, "XID_Start"),
    ("comp_ex", DERIVED_NORMALIZATION_PROPS, "Full_Composition_Exclusion"),
    ("cwkcf", DERIVED_NORMALIZATION_PROPS, "Changes_When_NFKC_Casefolded"),
    ("ebase", EMOJI_DATA, "Emoji_Modifier_Base"),
    ("ecomp", EMOJI_DATA, "Emoji_Component"),
    ("emod", EMOJI_DATA, "Emoji_Modifier"),
    ("emoji", EMOJI_DATA, "Emoji"),
    ("epres", EMOJI_DATA, "Emoji_Presentation"),
    ("extpict", EMOJI_DATA, "Extended_Pictographic"),
];

/// props/sets/*.txt: свойства из файлов UCD и производные от них
pub fn generate(
    ucd: &Ucd,
    unicode_data: &UnicodeData,
    normalization: &Normalization,
    output: &mut Output,
) -> Result<(), UcdError>
{
    let mut files: HashMap<&str, UcdFile> = HashMap::new();
    let mut sets: HashMap<&str, Vec<bool>> = HashMap::new();

    for &(name, file, property) in BINARY {
        if !files.contains_key(file) {
            files.insert(file, ucd.file(file)?);
        }

        let mut flags = vec![false; CODEPOINTS];

        match files.get(file).map(|file| file.fill_binary(property, &mut flags)) {
            Some(0) | None => warn!("{}: нет кодпоинтов со свойством {}", file, property),
            Some(count) => info!("{}: {} кодпоинтов", name, count),
        }

        sets.insert(name, flags);
    }

    let gc = property_values(ucd, unicode_data, "gc")?;

    let classes = posix(&gc, &sets);
    sets.extend(classes);

    let mut bidi_m = vec![false; CODEPOINTS];
    for (code, codepoint) in unicode_data.iter() {
        bidi_m[code as usize] = codepoint.bidi_mirrored;
    }
    sets.insert("bidi_m", bidi_m);

    sets.insert("sensitive", ucd.case_mappings(unicode_data)?.case_sensitive());

    sets.insert("nfc_inert", normalization.inert(false));
    sets.insert("nfkc_inert", normalization.inert(true));
    sets.insert("nfd_inert", normalization.decomposition_inert(false));
    sets.insert("nfkd_inert", normalization.decomposition_inert(true));
    sets.insert("segstart", normalization.segment_starters());

    let mut names: Vec<&&str> = sets.keys().collect();
    names.sort();

    for name in names {
        output.set(name, &sets[*name])?;
    }

    Ok(())
}

/// классы POSIX (alnum, blank, graph, print, xdigit) по общей категории и уже построенным свойствам
fn posix(gc: &[u32], sets: &HashMap<&str, Vec<bool>>) -> Vec<(&'static str, Vec<bool>)>
{
    let is = |code: usize, category: GeneralCategory| gc[code] == category.0 as u32;
    let flag = |name: &str, code: usize| sets.get(name).map(|flags| flags[code]).unwrap_or(false);

    let blank: Vec<bool> = (0 .. CODEPOINTS)
        .map(|code| code == 0x09 || is(code, GeneralCategory::SpaceSeparator))
        .collect();

    let graph: Vec<bool> = (0 .. CODEPOINTS)
        .map(|code| {
            !(flag("wspace", code)
                || is(code, GeneralCategory::Control)
                || is(code, GeneralCategory::Surrogate)
                || is(code, GeneralCategory::Unassigned))
        })
        .collect();

    let print = (0 .. CODEPOINTS)
        .map(|code| (graph[code] || blank[code]) && !is(code, GeneralCategory::Control))
        .collect();

    let alnum = (0 .. CODEPOINTS)
        .map(|code| flag("alpha", code) || is(code, GeneralCategory::DecimalNumber))
        .collect();

    let xdigit = (0 .. CODEPOINTS)
        .map(|code| flag("hex", code) || is(code, GeneralCategory::DecimalNumber))
        .collect();

    vec![
        ("alnum", alnum),
        ("blank", blank),
        ("graph", graph),
        ("print", print),
        ("xdigit", xdigit),
    ]
}
