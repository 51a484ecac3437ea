//! примитивы нормализации: CCC кодпоинта и каноническая композиция пары

use crate::error::DataError;
use crate::provider::markers::{CompositionsV1, NfdTablesV1};
use crate::provider::{load_singleton, DataProvider};

use super::composition::{hangul, Combining, Composer};
use super::decomposition::{Decomposer, LAST_DECOMPOSING_CODEPOINT_BLOCK};

/// последний кодпоинт, который может участвовать в композиции первым
const LAST_COMPOSING_CODEPOINT: u32 = ((LAST_DECOMPOSING_CODEPOINT_BLOCK + 1) << 7) - 1;

/// канонический класс комбинирования (CCC)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCombiningClassMap
{
    decomposer: Decomposer,
}

impl CanonicalCombiningClassMap
{
    pub fn try_new<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self {
            decomposer: Decomposer::new(load_singleton::<NfdTablesV1, P>(provider)?),
        })
    }

    /// CCC кодпоинта, 0 для некорректных значений
    #[inline]
    pub fn get(&self, code: u32) -> u8
    {
        self.decomposer.ccc(code)
    }

    #[inline]
    pub fn get_char(&self, c: char) -> u8
    {
        self.get(c as u32)
    }
}

/// каноническая композиция пары кодпоинтов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalComposition
{
    decomposer: Decomposer,
    composer: Composer,
    /// комбинирование составных кодпоинтов (у них нет своего значения в таблице декомпозиции),
    /// отсортировано по кодпоинту
    composites: Vec<(u32, Combining)>,
}

impl CanonicalComposition
{
    pub fn try_new<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        let decomposer = Decomposer::new(load_singleton::<NfdTablesV1, P>(provider)?);
        let composer = Composer::new(load_singleton::<CompositionsV1, P>(provider)?);

        let mut composites: Vec<(u32, Combining)> = composer
            .entries()
            .map(|pair| (pair.composed(), pair.combining()))
            .filter(|(_, combining)| !combining.is_none())
            .collect();

        composites.sort_unstable_by_key(|&(code, _)| code);
        composites.dedup_by_key(|&mut (code, _)| code);

        Ok(Self {
            decomposer,
            composer,
            composites,
        })
    }

    /// первичный составной кодпоинт для пары, включая слоги хангыль LV / LVT
    pub fn compose(&self, starter: u32, second: u32) -> Option<u32>
    {
        self.composer
            .compose_pair(starter, self.combining(starter), second)
            .map(|(composed, _)| composed)
    }

    /// все пары таблицы композиций (без хангыль): (первый, второй, результат)
    pub fn iter_pairs(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_
    {
        (0 ..= LAST_COMPOSING_CODEPOINT)
            .filter(|&code| !hangul::is_syllable(code))
            .flat_map(move |code| {
                self.composer
                    .pairs(self.combining(code))
                    .map(move |pair| (code, pair.second(), pair.composed()))
            })
    }

    fn combining(&self, code: u32) -> Combining
    {
        let combining = self.decomposer.starter_combining(code);

        if !combining.is_none() {
            return combining;
        }

        match self.composites.binary_search_by_key(&code, |&(code, _)| code) {
            Ok(index) => self.composites[index].1,
            Err(_) => Combining::None,
        }
    }
}
