//! сегментация текста: кластеры графем, слова, предложения (UAX #29)
//!
//! итераторы возвращают смещения границ в единицах входа (байты для UTF-8 и Latin-1, u16 для UTF-16),
//! первая граница - 0, последняя - длина входа

pub use complex::{Bies, ComplexLanguage, DictionarySegmenter, LstmLayer, LstmMatrix, LstmModel, LstmSegmenter};
pub use grapheme::{GraphemeClusterBreakIterator, GraphemeClusterSegmenter};
pub use iterator::{BreakIterator, BreakRules, Text};
pub use sentence::{SentenceBreakIterator, SentenceSegmenter};
pub use word::{WordBreakIterator, WordBreakOptions, WordSegmenter, WordSegmenterMode, WordType};

mod complex;
mod grapheme;
mod iterator;
mod sentence;
mod word;
