//! разбиение на слова для письменностей без пробелов между словами

use log::trace;

use crate::error::DataError;
use crate::provider::markers::{DictionaryV1, LstmV1};
use crate::provider::{load_optional, DataProvider, DataRequest};

pub use dictionary::DictionarySegmenter;
pub use lstm::{Bies, LstmLayer, LstmMatrix, LstmModel, LstmSegmenter};

use super::grapheme::{cluster_breaks, GraphemeClass};
use super::WordSegmenterMode;

mod dictionary;
mod lstm;

#[cfg(test)]
pub(crate) use lstm::test_model;

/// языки (письменности), для которых слова определяются словарём или моделью
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexLanguage
{
    Thai,
    Lao,
    Khmer,
    Burmese,
    /// прочие символы с Line_Break = SA
    SouthEastAsian,
    /// китайский и японский
    Cj,
}

impl ComplexLanguage
{
    pub const ALL: [Self; 6] = [
        Self::Thai,
        Self::Lao,
        Self::Khmer,
        Self::Burmese,
        Self::SouthEastAsian,
        Self::Cj,
    ];

    /// язык символа с Line_Break = SA
    pub fn from_south_east_asian(code: u32) -> Self
    {
        match code {
            0x0E00 ..= 0x0E7F => Self::Thai,
            0x0E80 ..= 0x0EFF => Self::Lao,
            0x1780 ..= 0x17FF | 0x19E0 ..= 0x19FF => Self::Khmer,
            0x1000 ..= 0x109F | 0xA9E0 ..= 0xA9FF | 0xAA60 ..= 0xAA7F => Self::Burmese,
            _ => Self::SouthEastAsian,
        }
    }

    /// имя словаря
    fn dictionary(&self) -> Option<&'static str>
    {
        match self {
            Self::Thai => Some("thai"),
            Self::Lao => Some("lao"),
            Self::Khmer => Some("khmer"),
            Self::Burmese => Some("burmese"),
            Self::SouthEastAsian => None,
            Self::Cj => Some("cj"),
        }
    }

    /// имя LSTM-модели
    fn lstm(&self) -> Option<&'static str>
    {
        match self {
            Self::Thai => Some("Thai_graphclust_model4_heavy"),
            Self::Lao => Some("Lao_graphclust_model4_heavy"),
            Self::Khmer => Some("Khmer_graphclust_model4_heavy"),
            Self::Burmese => Some("Burmese_graphclust_model4_heavy"),
            Self::SouthEastAsian | Self::Cj => None,
        }
    }
}

/// способ разбиения участка
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexStrategy
{
    Dictionary(DictionarySegmenter),
    Lstm(LstmSegmenter),
}

/// способы разбиения для каждого языка; нет способа - участок остаётся одним сегментом
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPayloads
{
    strategies: [Option<ComplexStrategy>; 6],
}

impl ComplexPayloads
{
    /// auto: LSTM, затем словарь; dictionary: только словарь; lstm: LSTM, для CJ - словарь
    pub fn try_new<P: DataProvider + ?Sized>(provider: &P, mode: WordSegmenterMode) -> Result<Self, DataError>
    {
        let mut strategies: [Option<ComplexStrategy>; 6] = Default::default();

        for (language, strategy) in ComplexLanguage::ALL.iter().zip(strategies.iter_mut()) {
            let lstm = match mode {
                WordSegmenterMode::Auto | WordSegmenterMode::Lstm => load_lstm(provider, *language)?,
                WordSegmenterMode::Dictionary => None,
            };

            *strategy = match lstm {
                Some(lstm) => Some(ComplexStrategy::Lstm(lstm)),
                None => match (mode, language) {
                    (WordSegmenterMode::Lstm, language) if *language != ComplexLanguage::Cj => None,
                    _ => load_dictionary(provider, *language)?.map(ComplexStrategy::Dictionary),
                },
            };

            match strategy {
                Some(ComplexStrategy::Lstm(lstm)) => trace!("{:?}: LSTM-модель {}", language, lstm.model().name),
                Some(ComplexStrategy::Dictionary(_)) => trace!("{:?}: словарь", language),
                None => trace!("{:?}: нет данных, участок - один сегмент", language),
            }
        }

        Ok(Self { strategies })
    }

    pub fn strategy(&self, language: ComplexLanguage) -> Option<&ComplexStrategy>
    {
        self.strategies[language as usize].as_ref()
    }

    /// границы внутри участка: индексы символов (относительно начала участка), кроме 0
    pub fn segment(&self, language: ComplexLanguage, chars: &[char], graphemes: &[GraphemeClass]) -> Vec<usize>
    {
        let strategy = match self.strategy(language) {
            Some(strategy) => strategy,
            None => return vec![],
        };

        // начала кластеров в символах, включая 0 и конец
        let mut starts = vec![0];
        starts.extend(cluster_breaks(graphemes));
        starts.push(chars.len());

        let text: String = chars.iter().collect();
        let mut offsets = Vec::with_capacity(chars.len() + 1);
        let mut offset = 0;
        for c in chars {
            offsets.push(offset);
            offset += c.len_utf8();
        }
        offsets.push(offset);

        let clusters: Vec<usize> = starts.iter().map(|&i| offsets[i]).collect();

        let breaks = match strategy {
            ComplexStrategy::Dictionary(dictionary) => dictionary.segment(&text, &clusters),
            ComplexStrategy::Lstm(lstm) => {
                let pieces: Vec<&str> = clusters
                    .windows(2)
                    .filter_map(|window| text.get(window[0] .. window[1]))
                    .collect();

                lstm.segment(&pieces)
            }
        };

        breaks.into_iter().filter_map(|cluster| starts.get(cluster).copied()).collect()
    }
}

fn load_lstm<P: DataProvider + ?Sized>(provider: &P, language: ComplexLanguage)
    -> Result<Option<LstmSegmenter>, DataError>
{
    let name = match language.lstm() {
        Some(name) => name,
        None => return Ok(None),
    };

    match load_optional::<LstmV1, P>(provider, DataRequest::for_attributes(name))? {
        Some(model) => {
            model.validate()?;
            Ok(Some(LstmSegmenter::new(model)))
        }
        None => Ok(None),
    }
}

fn load_dictionary<P: DataProvider + ?Sized>(provider: &P, language: ComplexLanguage)
    -> Result<Option<DictionarySegmenter>, DataError>
{
    let name = match language.dictionary() {
        Some(name) => name,
        None => return Ok(None),
    };

    Ok(load_optional::<DictionaryV1, P>(provider, DataRequest::for_attributes(name))?.map(DictionarySegmenter::new))
}
