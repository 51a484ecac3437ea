//! декодирование входного текста в последовательность символов с позициями.
//! некорректные последовательности заменяются на U+FFFD

pub use latin1::Latin1Chars;
pub use utf16::Utf16Chars;
pub use utf8::Utf8Chars;

mod latin1;
mod utf16;
mod utf8;

/// символ замены
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// символ входного текста
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedChar
{
    /// позиция первой кодовой единицы символа (байт для UTF-8 / Latin-1, u16 для UTF-16)
    pub offset: usize,
    pub ch: char,
    /// символ получен заменой некорректной последовательности
    pub replaced: bool,
}

impl DecodedChar
{
    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.ch as u32
    }
}

/// источник символов с позициями в кодовых единицах
pub trait CharSource: Iterator<Item = DecodedChar> + Clone
{
    /// длина всего входа в кодовых единицах
    fn len_units(&self) -> usize;
}
