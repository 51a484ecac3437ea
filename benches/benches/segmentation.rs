use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unicode_toolkit::provider::BakedProvider;
use unicode_toolkit::segmenter::{GraphemeClusterSegmenter, SentenceSegmenter, WordSegmenter};

mod group;

group!(
    grapheme,
    "grapheme",
    group::texts(false),
    ("toolkit", GraphemeClusterSegmenter::new(), |s, text| s.segment_str(black_box(text)).count())
);

group!(
    word,
    "word",
    group::texts(false),
    ("auto", WordSegmenter::try_new_auto(&BakedProvider).unwrap(), |s, text| s.segment_str(black_box(text)).count()),
    ("dictionary", WordSegmenter::try_new_dictionary(&BakedProvider).unwrap(), |s, text| {
        s.segment_str(black_box(text)).count()
    })
);

group!(
    sentence,
    "sentence",
    group::texts(false),
    ("toolkit", SentenceSegmenter::new(), |s, text| s.segment_str(black_box(text)).count())
);

criterion_group!(benches, grapheme, word, sentence);
criterion_main!(benches);
