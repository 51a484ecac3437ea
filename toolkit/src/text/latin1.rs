use super::{CharSource, DecodedChar};

/// символы текста в Latin-1: байт = кодпоинт U+0000 ..= U+00FF
#[derive(Debug, Clone)]
pub struct Latin1Chars<'a>
{
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Latin1Chars<'a>
{
    pub fn new(bytes: &'a [u8]) -> Self
    {
        Self { bytes, pos: 0 }
    }
}

impl<'a> Iterator for Latin1Chars<'a>
{
    type Item = DecodedChar;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        let byte = *self.bytes.get(self.pos)?;
        let offset = self.pos;
        self.pos += 1;

        Some(DecodedChar {
            offset,
            ch: byte as char,
            replaced: false,
        })
    }
}

impl<'a> CharSource for Latin1Chars<'a>
{
    fn len_units(&self) -> usize
    {
        self.bytes.len()
    }
}
