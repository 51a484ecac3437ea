use std::fmt;
use std::iter::FusedIterator;

use crate::text::{CharSource, DecodedChar};

/// правила определения границ
pub trait BreakRules
{
    /// свойства символа, нужные правилам
    type Class: Copy + fmt::Debug;

    fn classify(&self, c: char) -> Self::Class;

    /// есть ли граница перед символом i (0 < i < len). вызывается по возрастанию i, каждое i - один раз
    fn is_break(&mut self, text: &Text<Self::Class>, i: usize) -> bool;
}

/// декодированный и классифицированный текст
#[derive(Debug, Clone)]
pub struct Text<C>
{
    pub chars: Vec<DecodedChar>,
    pub classes: Vec<C>,
    /// длина в кодовых единицах
    pub len: usize,
}

impl<C> Text<C>
{
    /// позиция символа i в кодовых единицах
    #[inline(always)]
    pub fn offset(&self, i: usize) -> usize
    {
        self.chars.get(i).map(|c| c.offset).unwrap_or(self.len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IteratorState
{
    /// граница 0 ещё не выдана
    Ready,
    Advancing,
    Done,
}

/// итератор границ: 0, затем возрастающие позиции, последняя - длина входа
#[derive(Debug)]
pub struct BreakIterator<R: BreakRules>
{
    text: Text<R::Class>,
    rules: R,
    state: IteratorState,
    /// индекс символа последней выданной границы
    position: usize,
    /// индекс символа предпоследней выданной границы
    segment_start: usize,
}

impl<R: BreakRules> BreakIterator<R>
{
    pub(crate) fn new<S: CharSource>(source: S, rules: R) -> Self
    {
        let len = source.len_units();
        let chars: Vec<DecodedChar> = source.collect();
        let classes = chars.iter().map(|c| rules.classify(c.ch)).collect();

        Self {
            text: Text { chars, classes, len },
            rules,
            state: IteratorState::Ready,
            position: 0,
            segment_start: 0,
        }
    }

    /// классы символов сегмента, заканчивающегося последней выданной границей
    pub(crate) fn last_segment(&self) -> &[R::Class]
    {
        self.text.classes.get(self.segment_start .. self.position).unwrap_or(&[])
    }
}

impl<R: BreakRules> Iterator for BreakIterator<R>
{
    type Item = usize;

    fn next(&mut self) -> Option<usize>
    {
        match self.state {
            IteratorState::Ready => {
                self.state = match self.text.chars.is_empty() {
                    true => IteratorState::Done,
                    false => IteratorState::Advancing,
                };

                Some(0)
            }
            IteratorState::Advancing => {
                self.segment_start = self.position;

                loop {
                    self.position += 1;

                    if self.position >= self.text.chars.len() {
                        self.position = self.text.chars.len();
                        self.state = IteratorState::Done;

                        return Some(self.text.len);
                    }

                    if self.rules.is_break(&self.text, self.position) {
                        return Some(self.text.offset(self.position));
                    }
                }
            }
            IteratorState::Done => None,
        }
    }
}

impl<R: BreakRules> FusedIterator for BreakIterator<R> {}
