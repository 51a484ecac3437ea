//! структуры данных, лежащие в основе свойств Unicode

pub use inversion_list::CodePointInversionList;
pub use ranges::{CodePointRangeIterator, CodePointRangeIteratorResult};
pub use string_list::StringList;
pub use string_set::CodePointInversionListAndStringList;
pub use trie::{CodePointMapRange, CodePointTrie, TrieValue, CODE_POINT_MAX};

mod inversion_list;
mod ranges;
mod string_list;
mod string_set;
mod trie;
