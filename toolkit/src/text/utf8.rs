use super::{CharSource, DecodedChar, REPLACEMENT_CHARACTER};

/// маска, использующаяся для получения битов значения первого байта UTF-8
const FIRST_BYTE_VALUE_MASK: u8 = 0x7F;
/// маска, исключающая 2 старших бита в 2, 3, 4 байтах последовательности UTF-8
const CONT_MASK: u8 = 0x3F;

/// символы UTF-8 текста, возможно некорректного.
/// каждая максимальная часть некорректной последовательности заменяется одним U+FFFD
#[derive(Debug, Clone)]
pub struct Utf8Chars<'a>
{
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Utf8Chars<'a>
{
    pub fn new(bytes: &'a [u8]) -> Self
    {
        Self { bytes, pos: 0 }
    }

    /// символ и количество прочитанных байт, начиная с позиции pos
    #[inline]
    fn decode(&self, pos: usize) -> (char, usize, bool)
    {
        let first = self.bytes[pos];

        if first < 0x80 {
            return (first as char, 1, false);
        }

        let width = get_utf8_sequence_width(first) as usize;

        if width == 0 {
            return (REPLACEMENT_CHARACTER, 1, true);
        }

        // допустимые значения второго байта зависят от первого (исключаем overlong, суррогаты, > U+10FFFF)
        let (lo, hi) = match first {
            0xE0 => (0xA0, 0xBF),
            0xED => (0x80, 0x9F),
            0xF0 => (0x90, 0xBF),
            0xF4 => (0x80, 0x8F),
            _ => (0x80, 0xBF),
        };

        let mut code = utf8_first_byte(first, width as u32);

        for i in 1 .. width {
            let byte = match self.bytes.get(pos + i) {
                Some(&byte) => byte,
                None => return (REPLACEMENT_CHARACTER, i, true),
            };

            let valid = match i {
                1 => (lo ..= hi).contains(&byte),
                _ => (0x80 ..= 0xBF).contains(&byte),
            };

            if !valid {
                return (REPLACEMENT_CHARACTER, i, true);
            }

            code = utf8_acc_cont_byte(code, byte);
        }

        match char::from_u32(code) {
            Some(c) => (c, width, false),
            None => (REPLACEMENT_CHARACTER, width, true),
        }
    }
}

impl<'a> Iterator for Utf8Chars<'a>
{
    type Item = DecodedChar;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        if self.pos >= self.bytes.len() {
            return None;
        }

        let offset = self.pos;
        let (ch, width, replaced) = self.decode(offset);
        self.pos += width;

        Some(DecodedChar {
            offset,
            ch,
            replaced,
        })
    }
}

impl<'a> CharSource for Utf8Chars<'a>
{
    fn len_units(&self) -> usize
    {
        self.bytes.len()
    }
}

/// получаем количество байт в последовательности UTF-8, 0 - байт не может начинать последовательность
#[inline(always)]
pub fn get_utf8_sequence_width(first: u8) -> u8
{
    match first {
        0 ..= 0x7F => 1,
        0xC2 ..= 0xDF => 2,
        0xE0 ..= 0xEF => 3,
        0xF0 ..= 0xF4 => 4,
        _ => 0,
    }
}

/// убираем старшие биты первого байта UTF-8 последовательности
#[inline(always)]
fn utf8_first_byte(byte: u8, width: u32) -> u32
{
    (byte & (FIRST_BYTE_VALUE_MASK >> width)) as u32
}

/// убираем 2 старших бита у следующего байта последовательности и комбинируем с предыдущим значением
#[inline(always)]
fn utf8_acc_cont_byte(ch: u32, byte: u8) -> u32
{
    (ch << 6) | (byte & CONT_MASK) as u32
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn decode(bytes: &[u8]) -> Vec<(usize, char)>
    {
        Utf8Chars::new(bytes).map(|c| (c.offset, c.ch)).collect()
    }

    #[test]
    fn well_formed()
    {
        let text = "aж木🔥";
        let chars = decode(text.as_bytes());

        assert_eq!(chars, vec![(0, 'a'), (1, 'ж'), (3, '木'), (6, '🔥')]);
        assert!(Utf8Chars::new(text.as_bytes()).all(|c| !c.replaced));
        assert_eq!(Utf8Chars::new(text.as_bytes()).len_units(), 10);
    }

    #[test]
    fn maximal_subparts()
    {
        const R: char = REPLACEMENT_CHARACTER;

        // обрезанная 3-байтовая последовательность - одна замена
        assert_eq!(decode(b"a\xE6\x9Cb"), vec![(0, 'a'), (1, R), (3, 'b')]);
        // недопустимые первые байты
        assert_eq!(decode(b"\xC0\xAF"), vec![(0, R), (1, R)]);
        assert_eq!(decode(b"\xFF"), vec![(0, R)]);
        // суррогат в UTF-8
        assert_eq!(decode(b"\xED\xA0\x80"), vec![(0, R), (1, R), (2, R)]);
        // больше U+10FFFF
        assert_eq!(decode(b"\xF4\x90\x80\x80"), vec![(0, R), (1, R), (2, R), (3, R)]);
        // overlong
        assert_eq!(decode(b"\xE0\x80\xAF"), vec![(0, R), (1, R), (2, R)]);
        // обрезанная 4-байтовая в конце
        assert_eq!(decode(b"x\xF0\x9F\x94"), vec![(0, 'x'), (1, R)]);
    }
}
