//! кодирование таблиц в форматы, которые читает unicode_toolkit

pub use normalization::{encode_compositions, encode_decompositions};
pub use trie::{encode_trie, EncodedTrie};

mod normalization;
mod trie;

/// список инверсий: начала и концы (не включая) диапазонов, в которых флаг установлен
pub fn inversion_list(flags: &[bool]) -> Vec<u32>
{
    let mut list = vec![];
    let mut inside = false;

    for (code, &flag) in flags.iter().enumerate() {
        if flag != inside {
            list.push(code as u32);
            inside = flag;
        }
    }

    if inside {
        list.push(flags.len() as u32);
    }

    list
}
