use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::info;

use crate::encode::encode_trie;
use crate::output::{format, Output};
use crate::ucd::*;

use super::maps::value_names;
use super::CODEPOINTS;

/// признак номера набора в значении трие
const EXTENSIONS_FLAG: u32 = 0x8000;

/// Script_Extensions, сжатые до значений трие и таблицы наборов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptExtensions
{
    /// письменность или EXTENSIONS_FLAG | номер набора
    pub values: Vec<u32>,
    /// начала наборов в data и длина data в конце
    pub index: Vec<u16>,
    /// наборы: основная письменность, затем остальные по возрастанию
    pub data: Vec<u16>,
}

impl ScriptExtensions
{
    /// sc - значения Script, extensions - наборы из ScriptExtensions.txt
    pub fn new(sc: &[u32], extensions: &BTreeMap<u32, BTreeSet<u32>>) -> Result<Self, UcdError>
    {
        let mut values = sc.to_vec();
        let mut known: HashMap<Vec<u32>, u32> = HashMap::new();
        let mut index = vec![0];
        let mut data = vec![];

        for (&code, scripts) in extensions.iter() {
            let script = sc.get(code as usize).copied().unwrap_or(0);

            if scripts.len() == 1 && scripts.contains(&script) {
                continue;
            }

            let set: Vec<u32> = std::iter::once(script)
                .chain(scripts.iter().copied().filter(|&s| s != script))
                .collect();

            let number = match known.get(&set) {
                Some(&number) => number,
                None => {
                    let number = known.len() as u32;

                    data.extend(set.iter().map(|&s| s as u16));
                    index.push(to_u16(data.len())?);
                    known.insert(set, number);

                    number
                }
            };

            if number >= EXTENSIONS_FLAG {
                return Err(UcdError::Inconsistent(format!("слишком много наборов письменностей: {}", number)));
            }

            values[code as usize] = EXTENSIONS_FLAG | number;
        }

        Ok(Self { values, index, data })
    }
}

/// props/scx.txt
pub fn generate(ucd: &Ucd, sc: &[u32], output: &mut Output) -> Result<(), UcdError>
{
    let names = value_names("sc")?;
    let file = ucd.file(SCRIPT_EXTENSIONS)?;

    let mut extensions: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();

    for entry in file.entries.iter() {
        let scripts = entry
            .field(0)
            .split_whitespace()
            .map(|name| {
                u32::try_from(names.get_loose(name)).map_err(|_| UcdError::UnknownValue {
                    file: file.name.clone(),
                    value: name.to_owned(),
                })
            })
            .collect::<Result<BTreeSet<u32>, _>>()?;

        for code in entry.range.clone() {
            extensions.entry(code).or_default().extend(scripts.iter().copied());
        }
    }

    let scx = ScriptExtensions::new(sc, &extensions)?;
    let trie = encode_trie(&scx.values, 0)?;

    info!("scx: {} кодпоинтов, {} наборов", extensions.len(), scx.index.len() - 1);

    output.write("props/scx.txt", &format::script_extensions(&trie, &scx.index, &scx.data))
}

fn to_u16(value: usize) -> Result<u16, UcdError>
{
    u16::try_from(value).map_err(|_| UcdError::Inconsistent(format!("наборы письменностей не помещаются в u16: {}", value)))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use unicode_toolkit::properties::Script;

    #[test]
    fn sets()
    {
        let common = Script::Common.0 as u32;
        let arabic = Script::Arabic.0 as u32;
        let syriac = Script::Syriac.0 as u32;
        let thaana = Script::Thaana.0 as u32;

        let mut sc = vec![0; CODEPOINTS];
        sc[0x60C] = common;
        sc[0x61B] = common;
        sc[0x640] = common;
        sc[0x64B] = Script::Inherited.0 as u32;
        sc[0x660] = arabic;

        let extensions = BTreeMap::from([
            (0x60C, BTreeSet::from([arabic, syriac, thaana])),
            (0x61B, BTreeSet::from([arabic, syriac, thaana])),
            (0x640, BTreeSet::from([arabic, syriac])),
            (0x64B, BTreeSet::from([arabic, syriac])),
            (0x660, BTreeSet::from([arabic])),
        ]);

        let scx = ScriptExtensions::new(&sc, &extensions).unwrap();

        // одинаковые наборы у 060C и 061B, у 0640 и 064B основные письменности разные
        assert_eq!(scx.index, vec![0, 4, 7, 10]);
        assert_eq!(scx.values[0x60C], EXTENSIONS_FLAG);
        assert_eq!(scx.values[0x61B], EXTENSIONS_FLAG);
        assert_eq!(scx.values[0x64B], EXTENSIONS_FLAG | 2);
        assert_eq!(scx.values[0x660], arabic);
        assert_eq!(&scx.data[0 .. 4], &[common, arabic, syriac, thaana].map(|s| s as u16));
        assert_eq!(scx.data[7], Script::Inherited.0);
    }
}
