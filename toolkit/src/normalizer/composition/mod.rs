use super::codepoint::Codepoint;
use super::decomposition::Decomposer;
use super::CompositionTable;

pub mod hangul;

/// информация о комбинировании стартера: индекс первой пары в таблице композиций (11 бит) и количество пар
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combining(u16);

#[allow(non_upper_case_globals)]
impl Combining
{
    /// стартер ни с чем не комбинируется
    pub const None: Self = Self(0);

    #[inline(always)]
    pub fn index(&self) -> usize
    {
        (self.0 & 0x7FF) as usize
    }

    #[inline(always)]
    pub fn count(&self) -> usize
    {
        (self.0 >> 11) as usize
    }

    #[inline(always)]
    pub fn is_none(&self) -> bool
    {
        self.count() == 0
    }
}

impl From<u16> for Combining
{
    #[inline(always)]
    fn from(value: u16) -> Self
    {
        Self(value)
    }
}

/// пара в таблице композиций: второй кодпоинт (18 бит), результат (18 бит), комбинирование результата (16 бит)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionPair(u64);

impl CompositionPair
{
    #[inline(always)]
    pub fn second(&self) -> u32
    {
        (self.0 & 0x3FFFF) as u32
    }

    #[inline(always)]
    pub fn composed(&self) -> u32
    {
        ((self.0 >> 18) & 0x3FFFF) as u32
    }

    #[inline(always)]
    pub fn combining(&self) -> Combining
    {
        Combining::from((self.0 >> 48) as u16)
    }
}

/// каноническая композиция
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer
{
    table: CompositionTable,
}

impl Composer
{
    pub fn new(table: CompositionTable) -> Self
    {
        Self { table }
    }

    /// пары, в которых стартер участвует первым
    #[inline(always)]
    pub fn pairs(&self, combining: Combining) -> impl Iterator<Item = CompositionPair> + '_
    {
        self.table
            .compositions
            .get(combining.index() .. combining.index() + combining.count())
            .unwrap_or(&[])
            .iter()
            .map(|&entry| CompositionPair(entry))
    }

    /// все пары таблицы
    pub fn entries(&self) -> impl Iterator<Item = CompositionPair> + '_
    {
        self.table.compositions.iter().map(|&entry| CompositionPair(entry))
    }

    /// скомбинировать стартер со следующим кодпоинтом
    #[inline]
    pub fn compose_pair(&self, starter: u32, combining: Combining, second: u32) -> Option<(u32, Combining)>
    {
        if let Some(composed) = hangul::compose(starter, second) {
            return Some((composed, Combining::None));
        }

        self.pairs(combining)
            .find(|pair| pair.second() == second)
            .map(|pair| (pair.composed(), pair.combining()))
    }

    /// композиция канонически упорядоченного сегмента на месте.
    /// кодпоинт C блокирован от стартера S, если между ними есть не скомбинированный кодпоинт
    /// с CCC = 0 или CCC >= CCC(C)
    pub fn compose_segment(&self, decomposer: &Decomposer, buffer: &mut Vec<Codepoint>)
    {
        let mut len = 0;
        let mut starter: Option<usize> = None;
        let mut combining = Combining::None;
        // CCC последнего не скомбинированного кодпоинта после стартера
        let mut last_ccc: Option<u8> = None;

        for i in 0 .. buffer.len() {
            let codepoint = buffer[i];

            if let Some(starter) = starter {
                let blocked = matches!(last_ccc, Some(last) if last == 0 || last >= codepoint.ccc());

                if !blocked {
                    let composed = self.compose_pair(buffer[starter].code(), combining, codepoint.code());

                    if let Some((code, new_combining)) = composed {
                        buffer[starter] = Codepoint::from_code(code);
                        combining = new_combining;
                        continue;
                    }
                }
            }

            match codepoint.is_starter() {
                true => {
                    starter = Some(len);
                    combining = decomposer.starter_combining(codepoint.code());
                    last_ccc = None;
                }
                false => last_ccc = Some(codepoint.ccc()),
            }

            buffer[len] = codepoint;
            len += 1;
        }

        buffer.truncate(len);
    }
}
