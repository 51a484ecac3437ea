use std::collections::{BTreeMap, HashMap, HashSet};

use unicode_toolkit::normalizer::format::{
    BLOCK_BITS, CONTINUOUS_BLOCK_END, LAST_DECOMPOSING_CODEPOINT_BLOCK, MARKER_COMBINES_BACKWARDS, MARKER_EXPANSION,
    MARKER_NONSTARTER, MARKER_SINGLETON, MARKER_STARTER,
};
use unicode_toolkit::normalizer::{CompositionTable, DecompositionTables};

use crate::ucd::UcdError;

/// таблица композиций и то, что из неё попадает в таблицы декомпозиции
#[derive(Debug, Clone)]
pub struct EncodedCompositions
{
    pub table: CompositionTable,
    /// первый кодпоинт пары -> индекс в таблице | количество пар << 11
    pub combining: HashMap<u32, u16>,
    /// вторые кодпоинты пар с CCC = 0
    pub backwards: HashSet<u32>,
}

/// пары (первый, второй) -> результат композиции
///
/// запись таблицы: второй кодпоинт | результат << 18 | информация о комбинировании результата << 48
pub fn encode_compositions(pairs: &BTreeMap<(u32, u32), u32>, ccc: &[u8]) -> Result<EncodedCompositions, UcdError>
{
    let mut firsts: BTreeMap<u32, Vec<(u32, u32)>> = BTreeMap::new();

    for (&(first, second), &composed) in pairs.iter() {
        firsts.entry(first).or_default().push((second, composed));
    }

    let mut combining = HashMap::new();
    let mut position = 0;

    for (&first, seconds) in firsts.iter() {
        if position > 0x7FF || seconds.len() > 0x1F {
            return Err(UcdError::Inconsistent(format!(
                "композиции U+{:04X} не помещаются в 16 бит: {} / {}",
                first,
                position,
                seconds.len()
            )));
        }

        combining.insert(first, (position | (seconds.len() << 11)) as u16);
        position += seconds.len();
    }

    let compositions = firsts
        .values()
        .flatten()
        .map(|&(second, composed)| {
            let info = combining.get(&composed).copied().unwrap_or(0) as u64;
            second as u64 | (composed as u64) << 18 | info << 48
        })
        .collect::<Vec<u64>>();

    let backwards = pairs
        .keys()
        .map(|&(_, second)| second)
        .filter(|&second| ccc_of(ccc, second) == 0)
        .collect();

    Ok(EncodedCompositions {
        table: CompositionTable {
            compositions: compositions.into(),
        },
        combining,
        backwards,
    })
}

/// полные декомпозиции (без хангыля) -> таблицы NFD / NFKD
pub fn encode_decompositions(
    decompositions: &BTreeMap<u32, Vec<u32>>,
    ccc: &[u8],
    compositions: &EncodedCompositions,
) -> Result<DecompositionTables, UcdError>
{
    if let Some((&code, _)) = decompositions.last_key_value() {
        if code >> BLOCK_BITS > LAST_DECOMPOSING_CODEPOINT_BLOCK {
            return Err(UcdError::Inconsistent(format!(
                "декомпозиция U+{:04X} за пределами последнего блока",
                code
            )));
        }
    }

    let mut index: Vec<u16> = vec![];
    let mut data: Vec<u32> = vec![];
    let mut expansions: Vec<u32> = vec![];

    let mut known_expansions: HashMap<&[u32], u32> = HashMap::new();
    let mut known_blocks: HashMap<Vec<u32>, u16> = HashMap::new();

    for block in 0 ..= LAST_DECOMPOSING_CODEPOINT_BLOCK {
        let mut values = Vec::with_capacity(1 << BLOCK_BITS);

        for offset in 0 .. 1 << BLOCK_BITS {
            let code = (block << BLOCK_BITS) | offset;
            let own = ccc_of(ccc, code) as u32;
            let combining = compositions.combining.get(&code).copied().unwrap_or(0) as u32;

            let value = match decompositions.get(&code) {
                None => match own {
                    0 => match compositions.backwards.contains(&code) {
                        true => MARKER_COMBINES_BACKWARDS << 8 | combining << 16,
                        false => MARKER_STARTER << 8 | combining << 16,
                    },
                    _ => own | MARKER_NONSTARTER << 8,
                },
                Some(d) if d.len() == 1 && ccc_of(ccc, d[0]) == 0 => own | MARKER_SINGLETON << 8 | d[0] << 11,
                Some(d) => {
                    let position = match known_expansions.get(d.as_slice()) {
                        Some(&position) => position,
                        None => {
                            let position = expansions.len() as u32;
                            expansions.extend(d.iter().map(|&c| c << 8 | ccc_of(ccc, c) as u32));
                            known_expansions.insert(d.as_slice(), position);
                            position
                        }
                    };

                    if position >= 0x10000 || d.len() >= 0x20 {
                        return Err(UcdError::Inconsistent(format!(
                            "расширение U+{:04X} не помещается в 16 бит: {} / {}",
                            code,
                            position,
                            d.len()
                        )));
                    }

                    own | MARKER_EXPANSION << 8 | (d.len() as u32) << 11 | position << 16
                }
            };

            values.push(value);
        }

        let number = data.len() >> BLOCK_BITS;

        if (block << BLOCK_BITS) <= CONTINUOUS_BLOCK_END {
            index.push(number as u16);
            data.extend(values);
            continue;
        }

        let number = match known_blocks.get(&values) {
            Some(&number) => number,
            None => {
                let number = u16::try_from(number)
                    .map_err(|_| UcdError::Inconsistent(format!("блоков декомпозиции больше 65535: {}", number)))?;

                data.extend_from_slice(&values);
                known_blocks.insert(values, number);
                number
            }
        };

        index.push(number);
    }

    Ok(DecompositionTables {
        index: index.into(),
        data: data.into(),
        expansions: expansions.into(),
    })
}

#[inline]
fn ccc_of(ccc: &[u8], code: u32) -> u8
{
    ccc.get(code as usize).copied().unwrap_or(0)
}
