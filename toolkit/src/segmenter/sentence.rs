//! границы предложений (UAX #29, правила SB)

use crate::data;
use crate::error::DataError;
use crate::properties::{CodePointMapData8, SentenceBreak};
use crate::provider::DataProvider;
use crate::text::{Latin1Chars, Utf16Chars, Utf8Chars};

use super::iterator::{BreakIterator, BreakRules, Text};

/// итератор границ предложений
pub type SentenceBreakIterator<'l> = BreakIterator<SentenceRules<'l>>;

/// сегментатор предложений
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSegmenter
{
    sb: CodePointMapData8,
}

impl SentenceSegmenter
{
    pub fn try_new<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self {
            sb: CodePointMapData8::load_sentence_break(provider)?,
        })
    }

    /// сегментатор на запечённых данных
    pub fn new() -> Self
    {
        Self {
            sb: CodePointMapData8::from_trie(data::maps::sb().into()),
        }
    }

    pub fn segment_str(&self, input: &str) -> SentenceBreakIterator<'_>
    {
        BreakIterator::new(Utf8Chars::new(input.as_bytes()), self.rules())
    }

    /// UTF-8, возможно некорректный
    pub fn segment_utf8(&self, input: &[u8]) -> SentenceBreakIterator<'_>
    {
        BreakIterator::new(Utf8Chars::new(input), self.rules())
    }

    pub fn segment_utf16(&self, input: &[u16]) -> SentenceBreakIterator<'_>
    {
        BreakIterator::new(Utf16Chars::new(input), self.rules())
    }

    pub fn segment_latin1(&self, input: &[u8]) -> SentenceBreakIterator<'_>
    {
        BreakIterator::new(Latin1Chars::new(input), self.rules())
    }

    fn rules(&self) -> SentenceRules<'_>
    {
        SentenceRules {
            segmenter: self,
            last: SentenceBreak::Other,
            before_last: SentenceBreak::Other,
            terminator: Terminator::None,
            aterm: false,
        }
    }
}

impl Default for SentenceSegmenter
{
    fn default() -> Self
    {
        Self::new()
    }
}

/// контекст после терминатора предложения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator
{
    None,
    /// SATerm
    Term,
    /// SATerm Close+
    Close,
    /// SATerm Close* Sp+
    Space,
}

#[inline]
fn is_para_sep(sb: SentenceBreak) -> bool
{
    matches!(sb, SentenceBreak::Sep | SentenceBreak::CR | SentenceBreak::LF)
}

#[inline]
fn is_ignorable(sb: SentenceBreak) -> bool
{
    matches!(sb, SentenceBreak::Extend | SentenceBreak::Format)
}

#[inline]
fn is_sa_term(sb: SentenceBreak) -> bool
{
    matches!(sb, SentenceBreak::ATerm | SentenceBreak::STerm)
}

/// правила SB
#[derive(Debug)]
pub struct SentenceRules<'l>
{
    segmenter: &'l SentenceSegmenter,
    /// последний символ, не пропущенный по SB5
    last: SentenceBreak,
    before_last: SentenceBreak,
    terminator: Terminator,
    /// терминатор - ATerm (точка)
    aterm: bool,
}

impl<'l> SentenceRules<'l>
{
    fn push(&mut self, cur: SentenceBreak)
    {
        self.before_last = self.last;
        self.last = cur;

        self.terminator = match (cur, self.terminator) {
            (c, _) if is_sa_term(c) => {
                self.aterm = c == SentenceBreak::ATerm;
                Terminator::Term
            }
            (SentenceBreak::Close, Terminator::Term | Terminator::Close) => Terminator::Close,
            (SentenceBreak::Sp, Terminator::Term | Terminator::Close | Terminator::Space) => Terminator::Space,
            _ => Terminator::None,
        };
    }

    /// SB8: после точки до строчной буквы нет ни буквы другого вида, ни разделителя, ни терминатора
    fn lowercase_follows(text: &Text<SentenceBreak>, i: usize) -> bool
    {
        for &sb in text.classes.get(i ..).unwrap_or(&[]) {
            match sb {
                SentenceBreak::Lower => return true,
                SentenceBreak::OLetter | SentenceBreak::Upper => return false,
                sb if is_para_sep(sb) || is_sa_term(sb) => return false,
                _ => (),
            }
        }

        false
    }

    fn decide(&self, text: &Text<SentenceBreak>, i: usize, prev: SentenceBreak, cur: SentenceBreak) -> bool
    {
        use SentenceBreak as S;

        // SB3
        if prev == S::CR && cur == S::LF {
            return false;
        }

        // SB4
        if is_para_sep(prev) {
            return true;
        }

        // SB5
        if is_ignorable(cur) {
            return false;
        }

        let after_terminator = self.terminator != Terminator::None;

        match cur {
            // SB6
            S::Numeric if self.last == S::ATerm => false,
            // SB7
            S::Upper if self.last == S::ATerm && matches!(self.before_last, S::Upper | S::Lower) => false,
            // SB8
            _ if after_terminator && self.aterm && Self::lowercase_follows(text, i) => false,
            // SB8a
            c if after_terminator && (c == S::SContinue || is_sa_term(c)) => false,
            // SB9
            c if matches!(self.terminator, Terminator::Term | Terminator::Close)
                && (c == S::Close || c == S::Sp || is_para_sep(c)) =>
            {
                false
            }
            // SB10
            c if after_terminator && (c == S::Sp || is_para_sep(c)) => false,
            // SB11
            _ if after_terminator => true,
            // SB998
            _ => false,
        }
    }
}

impl<'l> BreakRules for SentenceRules<'l>
{
    type Class = SentenceBreak;

    fn classify(&self, c: char) -> SentenceBreak
    {
        SentenceBreak(self.segmenter.sb.get_char(c))
    }

    fn is_break(&mut self, text: &Text<SentenceBreak>, i: usize) -> bool
    {
        let (prev, cur) = (text.classes[i - 1], text.classes[i]);

        if i == 1 {
            self.push(prev);
        }

        let result = self.decide(text, i, prev, cur);

        if !is_ignorable(cur) || is_para_sep(prev) {
            self.push(cur);
        }

        result
    }
}
