use std::fmt::UpperHex;

use unicode_toolkit::normalizer::{CompositionTable, DecompositionTables};

use crate::encode::EncodedTrie;

/// представить массив чисел в текстовом виде
pub fn format_num_vec<T: UpperHex + Into<u64> + Copy>(input: &[T], boundary: usize) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for &e in input {
        let e_str = format!("{}, ", hex(e));

        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = e_str.len();
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }
    output.push('\n');

    output
}

/// TrieData для props/maps и ScriptExtensionsData
pub fn trie(trie: &EncodedTrie) -> String
{
    format!(
        "TrieData {{\n  index: &[{}  ],\n  data: &[{}  ],\n  high_start: 0x{:X},\n  high_value: {},\n  error_value: {},\n}}",
        format_num_vec(&trie.index, BOUNDARY),
        format_num_vec(&trie.data, BOUNDARY),
        trie.high_start,
        hex(trie.high_value),
        hex(trie.error_value),
    )
}

pub fn inversion_list(list: &[u32]) -> String
{
    format!("InversionListData {{\n  inv_list: &[{}  ],\n}}\n", format_num_vec(list, BOUNDARY))
}

/// трие значений sc / индексов наборов и сами наборы
pub fn script_extensions(values: &EncodedTrie, ext_index: &[u16], ext_data: &[u16]) -> String
{
    format!(
        "ScriptExtensionsData {{\n  trie: {},\n  ext_index: &[{}  ],\n  ext_data: &[{}  ],\n}}\n",
        trie(values).replace('\n', "\n  "),
        format_num_vec(ext_index, BOUNDARY),
        format_num_vec(ext_data, BOUNDARY),
    )
}

pub fn decompositions(tables: &DecompositionTables) -> String
{
    format!(
        "DecompositionData {{\n  index: &[{}  ],\n  data: &[{}  ],\n  expansions: &[{}  ],\n}}\n",
        format_num_vec(&tables.index, BOUNDARY),
        format_num_vec(&tables.data, BOUNDARY),
        format_num_vec(&tables.expansions, BOUNDARY),
    )
}

pub fn compositions(table: &CompositionTable) -> String
{
    format!(
        "CompositionData {{\n  compositions: &[{}  ],\n}}\n",
        format_num_vec(&table.compositions, BOUNDARY)
    )
}

/// ширина строки массива
const BOUNDARY: usize = 120;

fn hex<T: UpperHex + Into<u64> + Copy>(value: T) -> String
{
    match value.into() == 0 {
        true => "0".to_owned(),
        false => format!("0x{:X}", value),
    }
}
