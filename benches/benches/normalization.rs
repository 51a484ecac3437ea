use criterion::{black_box, criterion_group, criterion_main, Criterion};
use icu_normalizer::{ComposingNormalizer as IcuComposing, DecomposingNormalizer as IcuDecomposing};
use unicode_toolkit::normalizer::{ComposingNormalizer, DecomposingNormalizer};

mod group;

group!(
    nfc,
    "nfc",
    group::texts(false),
    ("toolkit", ComposingNormalizer::new_nfc(), |n, text| n.normalize(black_box(text))),
    ("icu", IcuComposing::new_nfc(), |n, text| n.normalize(black_box(text)))
);

group!(
    nfkc,
    "nfkc",
    group::texts(false),
    ("toolkit", ComposingNormalizer::new_nfkc(), |n, text| n.normalize(black_box(text))),
    ("icu", IcuComposing::new_nfkc(), |n, text| n.normalize(black_box(text)))
);

group!(
    nfd,
    "nfd",
    group::texts(false),
    ("toolkit", DecomposingNormalizer::new_nfd(), |n, text| n.normalize(black_box(text))),
    ("icu", IcuDecomposing::new_nfd(), |n, text| n.normalize(black_box(text)))
);

group!(
    nfkd,
    "nfkd",
    group::texts(false),
    ("toolkit", DecomposingNormalizer::new_nfkd(), |n, text| n.normalize(black_box(text))),
    ("icu", IcuDecomposing::new_nfkd(), |n, text| n.normalize(black_box(text)))
);

// сборка разложенного текста
group!(
    dec,
    "dec",
    group::texts(true),
    ("toolkit", ComposingNormalizer::new_nfc(), |n, text| n.normalize(black_box(text))),
    ("icu", IcuComposing::new_nfc(), |n, text| n.normalize(black_box(text)))
);

group!(
    check,
    "check",
    group::texts(false),
    ("toolkit", ComposingNormalizer::new_nfc(), |n, text| n.is_normalized(black_box(text))),
    ("icu", IcuComposing::new_nfc(), |n, text| n.is_normalized(black_box(text)))
);

criterion_group!(benches, nfc, nfkc, nfd, nfkd, dec, check);
criterion_main!(benches);
