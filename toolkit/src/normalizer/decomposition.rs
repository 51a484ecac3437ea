use super::codepoint::Codepoint;
use super::composition::hangul;
use super::composition::Combining;
use super::DecompositionTables;

/// с U+0000 и до этого кодпоинта включительно блоки в data идут последовательно
pub const CONTINUOUS_BLOCK_END: u32 = 0xFFF;
/// последний кодпоинт с декомпозицией (U+2FA1D), его блок - 0x5F4
pub const LAST_DECOMPOSING_CODEPOINT_BLOCK: u32 = 0x5F4;
/// размер блока - 128 кодпоинтов
pub const BLOCK_BITS: u32 = 7;
const BLOCK_MASK: u32 = (1 << BLOCK_BITS) - 1;

/// стартер без декомпозиции
pub const MARKER_STARTER: u32 = 0;
/// нестартер без декомпозиции
pub const MARKER_NONSTARTER: u32 = 1;
/// синглтон - декомпозиция в один стартер
pub const MARKER_SINGLETON: u32 = 2;
/// последовательность кодпоинтов в таблице расширений
pub const MARKER_EXPANSION: u32 = 3;
/// стартер, который может быть скомбинирован с предыдущим кодпоинтом
pub const MARKER_COMBINES_BACKWARDS: u32 = 4;

/// разобранное значение из таблицы декомпозиции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompositionValue
{
    Starter(Combining),
    Nonstarter(u8),
    Singleton(u32),
    /// индекс в таблице расширений и длина
    Expansion(usize, usize),
    CombinesBackwards(Combining),
}

/// декомпозиция NFD / NFKD
///
/// значение в таблице:
///  - биты 0..8 - CCC кодпоинта
///  - биты 8..11 - маркер
///  - стартер / комбинируемый с предыдущим: биты 16..32 - информация о комбинировании
///  - синглтон: биты 11..32 - кодпоинт
///  - расширение: биты 11..16 - длина, 16..32 - индекс в таблице расширений
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposer
{
    tables: DecompositionTables,
}

impl Decomposer
{
    pub fn new(tables: DecompositionTables) -> Self
    {
        Self { tables }
    }

    /// данные о декомпозиции / композиции кодпоинта
    #[inline(always)]
    pub fn get_dec_value(&self, code: u32) -> u32
    {
        if code <= CONTINUOUS_BLOCK_END {
            return self.tables.data.get(code as usize).copied().unwrap_or(0);
        }

        let block_index = code >> BLOCK_BITS;

        // все кодпоинты, следующие за U+2FA1D не имеют декомпозиции
        if block_index > LAST_DECOMPOSING_CODEPOINT_BLOCK {
            return 0;
        }

        let block = match self.tables.index.get(block_index as usize) {
            Some(&block) => block as u32,
            None => return 0,
        };

        let index = (block << BLOCK_BITS) | (code & BLOCK_MASK);

        self.tables.data.get(index as usize).copied().unwrap_or(0)
    }

    /// парсим значение из таблицы
    #[inline(always)]
    pub fn decode(&self, code: u32) -> DecompositionValue
    {
        let value = self.get_dec_value(code);

        match (value >> 8) & 0b_111 {
            MARKER_STARTER => DecompositionValue::Starter(Combining::from((value >> 16) as u16)),
            MARKER_NONSTARTER => DecompositionValue::Nonstarter(value as u8),
            MARKER_SINGLETON => DecompositionValue::Singleton(value >> 11),
            MARKER_EXPANSION => {
                DecompositionValue::Expansion((value >> 16) as usize, ((value >> 11) & 0x1F) as usize)
            }
            MARKER_COMBINES_BACKWARDS => DecompositionValue::CombinesBackwards(Combining::from((value >> 16) as u16)),
            // маркеры 5 ..= 7 в таблицах не встречаются
            _ => DecompositionValue::Starter(Combining::None),
        }
    }

    /// CCC кодпоинта
    #[inline(always)]
    pub fn ccc(&self, code: u32) -> u8
    {
        self.get_dec_value(code) as u8
    }

    /// с какими кодпоинтами может комбинироваться стартер
    #[inline(always)]
    pub fn starter_combining(&self, code: u32) -> Combining
    {
        match self.decode(code) {
            DecompositionValue::Starter(combining) | DecompositionValue::CombinesBackwards(combining) => combining,
            _ => Combining::None,
        }
    }

    /// полная декомпозиция кодпоинта в буфер
    pub fn decompose(&self, code: u32, buffer: &mut Vec<Codepoint>)
    {
        if hangul::is_syllable(code) {
            hangul::decompose_syllable(code, buffer);
            return;
        }

        match self.decode(code) {
            DecompositionValue::Nonstarter(ccc) => buffer.push(Codepoint::from_code_and_ccc(code, ccc)),
            DecompositionValue::Singleton(target) => buffer.push(Codepoint::from_code(target)),
            DecompositionValue::Expansion(index, len) => buffer.extend(
                self.expansion(index, len)
                    .iter()
                    .map(|&value| Codepoint::from_baked(value)),
            ),
            _ => buffer.push(Codepoint::from_code(code)),
        }
    }

    /// начинает ли кодпоинт новый сегмент нормализации.
    /// для композиции также учитываем кодпоинты, которые могут быть скомбинированы с предыдущими
    pub fn is_boundary(&self, code: u32, composing: bool) -> bool
    {
        if hangul::is_syllable(code) {
            return true;
        }

        if composing && hangul::is_vt_jamo(code) {
            return false;
        }

        match self.decode(code) {
            DecompositionValue::Nonstarter(_) => false,
            DecompositionValue::CombinesBackwards(_) => !composing,
            DecompositionValue::Singleton(target) => !(composing && self.combines_backwards(target)),
            DecompositionValue::Expansion(index, len) => match self.expansion(index, len).first() {
                Some(&first) => {
                    let first = Codepoint::from_baked(first);

                    first.is_starter() && !(composing && self.combines_backwards(first.code()))
                }
                None => true,
            },
            DecompositionValue::Starter(_) => true,
        }
    }

    /// может ли стартер быть скомбинирован с предыдущим кодпоинтом
    #[inline]
    fn combines_backwards(&self, code: u32) -> bool
    {
        hangul::is_vt_jamo(code) || matches!(self.decode(code), DecompositionValue::CombinesBackwards(_))
    }

    #[inline(always)]
    fn expansion(&self, index: usize, len: usize) -> &[u32]
    {
        self.tables.expansions.get(index .. index + len).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::data;

    fn decomposer(source: data::DecompositionData<'static>) -> Decomposer
    {
        Decomposer::new(source.into())
    }

    fn decompose(decomposer: &Decomposer, code: u32) -> Vec<(u32, u8)>
    {
        let mut buffer = vec![];
        decomposer.decompose(code, &mut buffer);

        buffer.iter().map(|c| (c.code(), c.ccc())).collect()
    }

    #[test]
    fn values()
    {
        let nfd = decomposer(data::normalizer::nfd());

        assert_eq!(decompose(&nfd, 0x41), vec![(0x41, 0)]);
        assert_eq!(decompose(&nfd, 0xC5), vec![(0x41, 0), (0x30A, 230)]);
        // ANGSTROM SIGN -> Å -> A + кольцо
        assert_eq!(decompose(&nfd, 0x212B), vec![(0x41, 0), (0x30A, 230)]);
        // OHM SIGN - синглтон
        assert_eq!(decompose(&nfd, 0x2126), vec![(0x3A9, 0)]);
        assert_eq!(decompose(&nfd, 0x301), vec![(0x301, 230)]);
        // хангыль
        assert_eq!(decompose(&nfd, 0xAC01), vec![(0x1100, 0), (0x1161, 0), (0x11A8, 0)]);
        // ﬁ - только совместимая декомпозиция
        assert_eq!(decompose(&nfd, 0xFB01), vec![(0xFB01, 0)]);

        let nfkd = decomposer(data::normalizer::nfkd());
        assert_eq!(decompose(&nfkd, 0xFB01), vec![(0x66, 0), (0x69, 0)]);
        assert_eq!(nfkd.get_dec_value(0x110000), 0);
    }

    #[test]
    fn markers()
    {
        let nfd = decomposer(data::normalizer::nfd());

        // A комбинируется с рядом диакритик
        match nfd.decode(0x41) {
            DecompositionValue::Starter(combining) => assert!(!combining.is_none()),
            value => panic!("{:?}", value),
        }
        // цифра ни с чем не комбинируется, значение в таблице - ноль
        assert_eq!(nfd.get_dec_value(0x31), MARKER_STARTER);
        assert_eq!(nfd.decode(0x31), DecompositionValue::Starter(Combining::None));
        assert_eq!(nfd.decode(0x301), DecompositionValue::Nonstarter(230));
        assert_eq!(nfd.decode(0x2126), DecompositionValue::Singleton(0x3A9));
        assert!(matches!(nfd.decode(0xB3E), DecompositionValue::CombinesBackwards(_)));
    }

    #[test]
    fn boundaries()
    {
        let nfd = decomposer(data::normalizer::nfd());

        assert!(nfd.is_boundary(0x41, true));
        assert!(!nfd.is_boundary(0x301, false));
        // гласная чамо комбинируется с предыдущей согласной
        assert!(!nfd.is_boundary(0x1161, true));
        assert!(nfd.is_boundary(0x1161, false));
        // ORIYA VOWEL SIGN AA комбинируется с предыдущим кодпоинтом
        assert!(!nfd.is_boundary(0xB3E, true));
        assert!(nfd.is_boundary(0xB3E, false));
        assert!(nfd.is_boundary(0xAC00, true));
    }
}
