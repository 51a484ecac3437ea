use unicode_toolkit::segmenter::{GraphemeClusterSegmenter, SentenceSegmenter, WordSegmenter};

use crate::data::{text, texts};

/// границы: начинаются с 0, заканчиваются длиной, строго возрастают, на границах символов
fn check(name: &str, input: &str, breaks: &[usize])
{
    assert_eq!(breaks.first(), Some(&0), "{}", name);
    assert_eq!(breaks.last(), Some(&input.len()), "{}", name);
    assert!(breaks.windows(2).all(|w| w[0] < w[1]), "{}", name);
    assert!(breaks.iter().all(|&i| input.is_char_boundary(i)), "{}", name);
}

/// смещения UTF-8 -> смещения UTF-16
fn to_utf16(input: &str, breaks: &[usize]) -> Vec<usize>
{
    breaks.iter().map(|&i| input[.. i].encode_utf16().count()).collect()
}

macro_rules! segment_all {
    ($segmenter: expr) => {
        let segmenter = $segmenter;

        for text in texts() {
            let breaks: Vec<usize> = segmenter.segment_str(&text.content).collect();
            check(&text.name, &text.content, &breaks);

            let utf16: Vec<u16> = text.content.encode_utf16().collect();
            let breaks16: Vec<usize> = segmenter.segment_utf16(&utf16).collect();
            assert_eq!(breaks16, to_utf16(&text.content, &breaks), "utf16, {}", text.name);

            let breaks8: Vec<usize> = segmenter.segment_utf8(text.content.as_bytes()).collect();
            assert_eq!(breaks8, breaks, "utf8, {}", text.name);
        }
    };
}

#[test]
fn graphemes()
{
    segment_all!(GraphemeClusterSegmenter::new());
}

#[test]
fn words()
{
    segment_all!(WordSegmenter::try_new_auto(&unicode_toolkit::provider::BakedProvider).unwrap());
    segment_all!(WordSegmenter::try_new_dictionary(&unicode_toolkit::provider::BakedProvider).unwrap());
}

#[test]
fn sentences()
{
    segment_all!(SentenceSegmenter::new());
}

/// разложение не меняет количество кластеров графем
#[test]
fn decomposed_graphemes()
{
    let segmenter = GraphemeClusterSegmenter::new();

    for name in ["greek", "korean", "vietnamese"] {
        let composed = text(name);
        let decomposed = text(&format!("{}_nfd", name));

        assert_eq!(
            segmenter.segment_str(&composed).count(),
            segmenter.segment_str(&decomposed).count(),
            "{}",
            name
        );
    }
}

#[test]
fn dictionary_words()
{
    let segmenter = WordSegmenter::try_new_dictionary(&unicode_toolkit::provider::BakedProvider).unwrap();

    // ภาษา|ไทย|เป็น|ภาษา...
    let breaks: Vec<usize> = segmenter.segment_str(&text("thai")).collect();
    assert!([12, 21, 33].iter().all(|i| breaks.contains(i)), "{:?}", breaks);

    // 你好|，|世界|！
    let breaks: Vec<usize> = segmenter.segment_str(&text("chinese")).collect();
    assert_eq!(&breaks[.. 5], &[0, 6, 9, 15, 18]);
}

#[test]
fn english_sentences()
{
    let segmenter = SentenceSegmenter::new();
    let english = text("english");

    let sentences: Vec<&str> = segmenter
        .segment_str(&english)
        .collect::<Vec<_>>()
        .windows(2)
        .map(|w| &english[w[0] .. w[1]])
        .collect();

    assert_eq!(sentences[0], "The quick brown fox jumps over the lazy dog. ");
    // Mr. и Jan. перед заглавной буквой - границы (SB11), правила сокращений требуют строчной буквы
    assert_eq!(sentences[1], "Mr. ");
}

/// ZWJ перед пиктограммой, которая не является эмодзи (★, Extended_Pictographic)
#[test]
fn pictographs()
{
    let graphemes = GraphemeClusterSegmenter::new();
    assert_eq!(graphemes.segment_str("\u{2605}\u{200D}\u{2605}").collect::<Vec<_>>(), vec![0, 9]);
    assert_eq!(graphemes.segment_str("\u{2605}\u{2605}").collect::<Vec<_>>(), vec![0, 3, 6]);

    let words = WordSegmenter::try_new_auto(&unicode_toolkit::provider::BakedProvider).unwrap();
    assert_eq!(words.segment_str("a\u{200D}\u{2605}").collect::<Vec<_>>(), vec![0, 7]);
}
