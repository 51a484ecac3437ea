use super::{CharSource, DecodedChar, REPLACEMENT_CHARACTER};

/// символы UTF-16 текста, непарные суррогаты заменяются на U+FFFD
#[derive(Debug, Clone)]
pub struct Utf16Chars<'a>
{
    units: &'a [u16],
    pos: usize,
}

impl<'a> Utf16Chars<'a>
{
    pub fn new(units: &'a [u16]) -> Self
    {
        Self { units, pos: 0 }
    }
}

impl<'a> Iterator for Utf16Chars<'a>
{
    type Item = DecodedChar;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        let offset = self.pos;
        let lead = *self.units.get(offset)?;

        let (ch, width) = match lead {
            0xD800 ..= 0xDBFF => match self.units.get(offset + 1) {
                Some(&trail @ 0xDC00 ..= 0xDFFF) => {
                    let code = 0x10000 + (((lead as u32) - 0xD800) << 10) + ((trail as u32) - 0xDC00);
                    (char::from_u32(code), 2)
                }
                _ => (None, 1),
            },
            0xDC00 ..= 0xDFFF => (None, 1),
            _ => (char::from_u32(lead as u32), 1),
        };

        self.pos += width;

        Some(DecodedChar {
            offset,
            ch: ch.unwrap_or(REPLACEMENT_CHARACTER),
            replaced: ch.is_none(),
        })
    }
}

impl<'a> CharSource for Utf16Chars<'a>
{
    fn len_units(&self) -> usize
    {
        self.units.len()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn surrogates()
    {
        let units: Vec<u16> = "a🔥".encode_utf16().chain([0xD800, 0x62, 0xDC00]).collect();
        let chars: Vec<_> = Utf16Chars::new(&units).map(|c| (c.offset, c.ch, c.replaced)).collect();

        assert_eq!(
            chars,
            vec![
                (0, 'a', false),
                (1, '🔥', false),
                (3, REPLACEMENT_CHARACTER, true),
                (4, 'b', false),
                (5, REPLACEMENT_CHARACTER, true),
            ]
        );
    }
}
