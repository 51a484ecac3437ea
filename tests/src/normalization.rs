use icu_normalizer::{ComposingNormalizer as IcuComposing, DecomposingNormalizer as IcuDecomposing};
use unicode_toolkit::normalizer::{ComposingNormalizer, DecomposingNormalizer};
use unicode_toolkit::provider::BakedProvider;

use crate::data::texts;

/// сравниваем с результатами нормализации ICU
#[test]
fn icu()
{
    macro_rules! test {
        ($(($name: expr, $ours: expr, $icu: expr)),+) => {
            $(
                let ours = $ours;
                let icu = $icu;

                for text in texts() {
                    let expected = icu.normalize(&text.content);

                    assert_eq!(ours.normalize(&text.content), expected, "{}, {}", $name, text.name);
                    assert!(ours.is_normalized(&expected), "{}, {}", $name, text.name);
                    assert_eq!(
                        ours.is_normalized(&text.content),
                        icu.is_normalized(&text.content),
                        "{}, {}",
                        $name,
                        text.name
                    );

                    let utf16: Vec<u16> = text.content.encode_utf16().collect();
                    assert_eq!(ours.normalize_utf16(&utf16), icu.normalize_utf16(&utf16), "{} utf16, {}", $name, text.name);
                }
            )+
        };
    }

    test!(
        ("nfc", ComposingNormalizer::try_new_nfc(&BakedProvider).unwrap(), IcuComposing::new_nfc()),
        ("nfkc", ComposingNormalizer::try_new_nfkc(&BakedProvider).unwrap(), IcuComposing::new_nfkc()),
        ("nfd", DecomposingNormalizer::try_new_nfd(&BakedProvider).unwrap(), IcuDecomposing::new_nfd()),
        ("nfkd", DecomposingNormalizer::try_new_nfkd(&BakedProvider).unwrap(), IcuDecomposing::new_nfkd())
    );
}

/// разложенный текст собирается обратно
#[test]
fn decomposed()
{
    let nfc = ComposingNormalizer::new_nfc();

    for name in ["greek", "korean", "vietnamese"] {
        let composed = crate::data::text(name);
        let decomposed = crate::data::text(&format!("{}_nfd", name));

        assert_ne!(composed, decomposed);
        assert_eq!(nfc.normalize(&decomposed), nfc.normalize(&composed), "{}", name);

        let up_to = nfc.is_normalized_up_to(&decomposed);
        assert!(up_to < decomposed.len());
        assert!(decomposed.is_char_boundary(up_to));
        assert!(nfc.is_normalized(&decomposed[.. up_to]));
    }
}

/// запись в fmt::Write совпадает с normalize
#[test]
fn sink()
{
    let nfkc = ComposingNormalizer::new_nfkc();

    for text in texts() {
        let mut result = String::new();
        nfkc.normalize_to(&text.content, &mut result).unwrap();

        assert_eq!(result, nfkc.normalize(&text.content), "{}", text.name);
    }
}
