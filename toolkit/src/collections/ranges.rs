use std::ops::RangeInclusive;

/// результат очередного шага итератора диапазонов в виде структуры фиксированного размера.
/// при done == true значения start и end не определены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct CodePointRangeIteratorResult
{
    pub start: u32,
    pub end: u32,
    pub done: bool,
}

/// итератор диапазонов кодпоинтов (включительно), по возрастанию
pub struct CodePointRangeIterator<'a>
{
    inner: Box<dyn Iterator<Item = RangeInclusive<u32>> + Send + 'a>,
}

impl<'a> CodePointRangeIterator<'a>
{
    pub fn new(inner: impl Iterator<Item = RangeInclusive<u32>> + Send + 'a) -> Self
    {
        Self {
            inner: Box::new(inner),
        }
    }

    /// итератор, склеивающий смежные диапазоны
    pub fn coalesced(inner: impl Iterator<Item = RangeInclusive<u32>> + Send + 'a) -> Self
    {
        Self::new(Coalesce {
            inner,
            pending: None,
        })
    }

    /// следующий диапазон в виде структуры с признаком окончания
    pub fn next_result(&mut self) -> CodePointRangeIteratorResult
    {
        match self.next() {
            Some(range) => CodePointRangeIteratorResult {
                start: *range.start(),
                end: *range.end(),
                done: false,
            },
            None => CodePointRangeIteratorResult {
                start: 0,
                end: 0,
                done: true,
            },
        }
    }
}

impl<'a> Iterator for CodePointRangeIterator<'a>
{
    type Item = RangeInclusive<u32>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        self.inner.next()
    }
}

/// склеивание диапазонов вида a ..= b, b + 1 ..= c
struct Coalesce<I>
{
    inner: I,
    pending: Option<RangeInclusive<u32>>,
}

impl<I> Iterator for Coalesce<I>
where
    I: Iterator<Item = RangeInclusive<u32>>,
{
    type Item = RangeInclusive<u32>;

    fn next(&mut self) -> Option<Self::Item>
    {
        loop {
            let next = self.inner.next();

            match (self.pending.take(), next) {
                (None, None) => return None,
                (Some(pending), None) => return Some(pending),
                (None, Some(next)) => self.pending = Some(next),
                (Some(pending), Some(next)) => {
                    match pending.end().checked_add(1) == Some(*next.start()) {
                        true => self.pending = Some(*pending.start() ..= *next.end()),
                        false => {
                            self.pending = Some(next);
                            return Some(pending);
                        }
                    }
                }
            }
        }
    }
}
