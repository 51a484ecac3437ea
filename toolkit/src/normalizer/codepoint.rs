use crate::text::REPLACEMENT_CHARACTER;

/// кодпоинт для декомпозиции в виде u32, где CCC хранится в младшем байте
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codepoint(u32);

impl From<Codepoint> for char
{
    #[inline(always)]
    fn from(value: Codepoint) -> Self
    {
        char::from_u32(value.code()).unwrap_or(REPLACEMENT_CHARACTER)
    }
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{{ code: U+{:04X}, ccc: {} }}", self.code(), self.ccc())
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.0 >> 8
    }

    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        self.0 as u8
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.0 as u8 == 0
    }

    /// значение из таблицы расширений: код << 8 | CCC
    #[inline(always)]
    pub fn from_baked(value: u32) -> Self
    {
        Self(value)
    }

    #[inline(always)]
    pub fn from_code_and_ccc(code: u32, ccc: u8) -> Self
    {
        Self(code << 8 | (ccc as u32))
    }

    #[inline(always)]
    pub fn from_code(code: u32) -> Self
    {
        Self(code << 8)
    }
}

/// каноническое упорядочивание: устойчивая сортировка по CCC каждой последовательности нестартеров
pub fn canonical_order(buffer: &mut [Codepoint])
{
    let mut i = 0;

    while i < buffer.len() {
        if buffer[i].is_starter() {
            i += 1;
            continue;
        }

        let start = i;
        while i < buffer.len() && !buffer[i].is_starter() {
            i += 1;
        }

        if i - start > 1 {
            buffer[start .. i].sort_by_key(|c| c.ccc());
        }
    }
}
