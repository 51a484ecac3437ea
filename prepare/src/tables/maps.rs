use log::info;
use unicode_toolkit::properties::PropertyValueNameToEnumMapper;
use unicode_toolkit::provider::BakedProvider;

use crate::encode::encode_trie;
use crate::output::Output;
use crate::ucd::*;

use super::CODEPOINTS;

/// перечислимые свойства: таблица в props/maps, файл UCD и поле значения
const MAPS: &[(&str, &str, usize)] = &[
    ("bc", BIDI_CLASS, 0),
    ("ea", EAST_ASIAN_WIDTH, 0),
    ("gcb", GRAPHEME_BREAK, 0),
    ("hst", HANGUL_SYLLABLE_TYPE, 0),
    ("insc", INDIC_SYLLABIC_CATEGORY, 0),
    ("jt", JOINING_TYPE, 0),
    ("lb", LINE_BREAK, 0),
    ("sb", SENTENCE_BREAK, 0),
    ("sc", SCRIPTS, 0),
    ("wb", WORD_BREAK, 0),
];

/// имена значений свойства из запечённых данных
pub fn value_names(property: &str) -> Result<PropertyValueNameToEnumMapper, UcdError>
{
    let provider = &BakedProvider;

    let mapper = match property {
        "bc" => PropertyValueNameToEnumMapper::load_bidi_class(provider),
        "ccc" => PropertyValueNameToEnumMapper::load_canonical_combining_class(provider),
        "ea" => PropertyValueNameToEnumMapper::load_east_asian_width(provider),
        "gc" => PropertyValueNameToEnumMapper::load_general_category(provider),
        "gcb" => PropertyValueNameToEnumMapper::load_grapheme_cluster_break(provider),
        "hst" => PropertyValueNameToEnumMapper::load_hangul_syllable_type(provider),
        "insc" => PropertyValueNameToEnumMapper::load_indic_syllabic_category(provider),
        "jt" => PropertyValueNameToEnumMapper::load_joining_type(provider),
        "lb" => PropertyValueNameToEnumMapper::load_line_break(provider),
        "sb" => PropertyValueNameToEnumMapper::load_sentence_break(provider),
        "sc" => PropertyValueNameToEnumMapper::load_script(provider),
        "wb" => PropertyValueNameToEnumMapper::load_word_break(provider),
        _ => return Err(UcdError::Inconsistent(format!("нет имён значений для {}", property))),
    }?;

    Ok(mapper)
}

/// значения свойства для всех кодпоинтов
pub fn property_values(ucd: &Ucd, unicode_data: &UnicodeData, property: &str) -> Result<Vec<u32>, UcdError>
{
    let mut values = vec![0; CODEPOINTS];

    match property {
        "ccc" => {
            for (&code, codepoint) in unicode_data.codepoints.iter() {
                values[code as usize] = codepoint.ccc as u32;
            }
        }
        "gc" => {
            let names = value_names(property)?;

            for (code, codepoint) in unicode_data.iter() {
                values[code as usize] = lookup(&names, &codepoint.gc).ok_or_else(|| UcdError::UnknownValue {
                    file: UNICODE_DATA.to_owned(),
                    value: codepoint.gc.clone(),
                })?;
            }
        }
        _ => {
            let &(_, file, field) = MAPS
                .iter()
                .find(|(name, _, _)| *name == property)
                .ok_or_else(|| UcdError::Inconsistent(format!("неизвестное свойство {}", property)))?;

            let names = value_names(property)?;
            ucd.file(file)?.fill_enum(field, &mut values, |name| lookup(&names, name))?;
        }
    }

    Ok(values)
}

/// props/maps/*.txt
pub fn generate(ucd: &Ucd, unicode_data: &UnicodeData, output: &mut Output) -> Result<(), UcdError>
{
    let properties = ["ccc", "gc"].into_iter().chain(MAPS.iter().map(|(name, _, _)| *name));

    for property in properties {
        let values = property_values(ucd, unicode_data, property)?;
        let trie = encode_trie(&values, 0)?;

        info!(
            "{}: индекс {}, данные {}, high_start 0x{:X}",
            property,
            trie.index.len(),
            trie.data.len(),
            trie.high_start
        );

        output.map(property, &trie)?;
    }

    Ok(())
}

fn lookup(names: &PropertyValueNameToEnumMapper, name: &str) -> Option<u32>
{
    u32::try_from(names.get_loose(name)).ok()
}
