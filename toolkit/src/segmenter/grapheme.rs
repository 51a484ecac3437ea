//! границы кластеров графем (UAX #29, правила GB)

use crate::data;
use crate::error::DataError;
use crate::properties::{CodePointMapData8, CodePointSetData, GraphemeClusterBreak};
use crate::provider::DataProvider;
use crate::text::{Latin1Chars, Utf16Chars, Utf8Chars};

use super::iterator::{BreakIterator, BreakRules, Text};

/// итератор границ кластеров графем
pub type GraphemeClusterBreakIterator<'l> = BreakIterator<GraphemeRules<'l>>;

/// сегментатор кластеров графем
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphemeClusterSegmenter
{
    gcb: CodePointMapData8,
    pictographic: CodePointSetData,
}

impl GraphemeClusterSegmenter
{
    pub fn try_new<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, DataError>
    {
        Ok(Self {
            gcb: CodePointMapData8::load_grapheme_cluster_break(provider)?,
            pictographic: CodePointSetData::load_extended_pictographic(provider)?,
        })
    }

    /// сегментатор на запечённых данных
    pub fn new() -> Self
    {
        Self {
            gcb: CodePointMapData8::from_trie(data::maps::gcb().into()),
            pictographic: CodePointSetData::from_inversion_list(data::sets::extpict().into()),
        }
    }

    pub fn segment_str(&self, input: &str) -> GraphemeClusterBreakIterator<'_>
    {
        BreakIterator::new(Utf8Chars::new(input.as_bytes()), self.rules())
    }

    /// UTF-8, возможно некорректный
    pub fn segment_utf8(&self, input: &[u8]) -> GraphemeClusterBreakIterator<'_>
    {
        BreakIterator::new(Utf8Chars::new(input), self.rules())
    }

    pub fn segment_utf16(&self, input: &[u16]) -> GraphemeClusterBreakIterator<'_>
    {
        BreakIterator::new(Utf16Chars::new(input), self.rules())
    }

    pub fn segment_latin1(&self, input: &[u8]) -> GraphemeClusterBreakIterator<'_>
    {
        BreakIterator::new(Latin1Chars::new(input), self.rules())
    }

    pub(crate) fn classify(&self, c: char) -> GraphemeClass
    {
        GraphemeClass {
            gcb: GraphemeClusterBreak(self.gcb.get_char(c)),
            pictographic: self.pictographic.contains_char(c),
        }
    }

    fn rules(&self) -> GraphemeRules<'_>
    {
        GraphemeRules {
            segmenter: self,
            state: GraphemeState::default(),
        }
    }
}

impl Default for GraphemeClusterSegmenter
{
    fn default() -> Self
    {
        Self::new()
    }
}

/// свойства символа для правил GB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphemeClass
{
    gcb: GraphemeClusterBreak,
    pictographic: bool,
}

impl GraphemeClass
{
    /// Extended_Pictographic
    #[inline]
    pub(crate) fn is_pictographic(&self) -> bool
    {
        self.pictographic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum EmojiState
{
    #[default]
    None,
    /// \p{ExtPict} Extend*
    Pictographic,
    /// \p{ExtPict} Extend* ZWJ
    PictographicZwj,
}

/// состояние правил GB по уже пройденным символам
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GraphemeState
{
    /// количество идущих подряд RI, включая последний символ
    regional_indicators: usize,
    emoji: EmojiState,
}

impl GraphemeState
{
    pub(crate) fn start(first: GraphemeClass) -> Self
    {
        let mut state = Self::default();
        state.advance(first);

        state
    }

    /// граница между prev и cur
    pub(crate) fn is_break(&self, prev: GraphemeClass, cur: GraphemeClass) -> bool
    {
        use GraphemeClusterBreak as G;

        match (prev.gcb, cur.gcb) {
            // GB3
            (G::CR, G::LF) => false,
            // GB4, GB5
            (G::Control | G::CR | G::LF, _) | (_, G::Control | G::CR | G::LF) => true,
            // GB6 - GB8: слоги хангыль
            (G::L, G::L | G::V | G::LV | G::LVT) => false,
            (G::LV | G::V, G::V | G::T) => false,
            (G::LVT | G::T, G::T) => false,
            // GB9, GB9a
            (_, G::Extend | G::ZWJ | G::SpacingMark) => false,
            // GB9b
            (G::Prepend, _) => false,
            // GB11
            (G::ZWJ, _) if cur.pictographic && self.emoji == EmojiState::PictographicZwj => false,
            // GB12, GB13: флаги - пары RI
            (G::RegionalIndicator, G::RegionalIndicator) => self.regional_indicators % 2 == 0,
            // GB999
            _ => true,
        }
    }

    pub(crate) fn advance(&mut self, cur: GraphemeClass)
    {
        use GraphemeClusterBreak as G;

        self.regional_indicators = match cur.gcb {
            G::RegionalIndicator => self.regional_indicators + 1,
            _ => 0,
        };

        self.emoji = match (cur.pictographic, cur.gcb, self.emoji) {
            (true, _, _) => EmojiState::Pictographic,
            (false, G::Extend, EmojiState::Pictographic) => EmojiState::Pictographic,
            (false, G::ZWJ, EmojiState::Pictographic) => EmojiState::PictographicZwj,
            _ => EmojiState::None,
        };
    }
}

/// границы кластеров в последовательности классов: индексы начал кластеров, кроме 0
pub(crate) fn cluster_breaks(classes: &[GraphemeClass]) -> Vec<usize>
{
    let mut breaks = vec![];
    let mut state = match classes.first() {
        Some(&first) => GraphemeState::start(first),
        None => return breaks,
    };

    for i in 1 .. classes.len() {
        if state.is_break(classes[i - 1], classes[i]) {
            breaks.push(i);
        }
        state.advance(classes[i]);
    }

    breaks
}

/// правила GB
#[derive(Debug)]
pub struct GraphemeRules<'l>
{
    segmenter: &'l GraphemeClusterSegmenter,
    state: GraphemeState,
}

impl<'l> BreakRules for GraphemeRules<'l>
{
    type Class = GraphemeClass;

    fn classify(&self, c: char) -> GraphemeClass
    {
        self.segmenter.classify(c)
    }

    fn is_break(&mut self, text: &Text<GraphemeClass>, i: usize) -> bool
    {
        let (prev, cur) = (text.classes[i - 1], text.classes[i]);

        if i == 1 {
            self.state = GraphemeState::start(prev);
        }

        let result = self.state.is_break(prev, cur);
        self.state.advance(cur);

        result
    }
}
