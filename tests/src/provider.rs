use unicode_toolkit::normalizer::DecomposingNormalizer;
use unicode_toolkit::properties::{CodePointMapData16, CodePointMapData8, GeneralCategory, Script, UnicodeSetData};
use unicode_toolkit::provider::{export, BakedProvider, BlobExporter, ExportOptions, FilesystemExporter};
use unicode_toolkit::segmenter::{GraphemeClusterSegmenter, SentenceSegmenter};
use unicode_toolkit::{DataErrorKind, DataLocale, Provider};

fn locale(s: &str) -> DataLocale
{
    s.parse().unwrap()
}

/// экспорт в каталог и чтение через FsDataProvider
#[test]
fn filesystem()
{
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("data");

    let options = ExportOptions {
        markers: vec![String::from("props/gc@"), String::from("props/exemplars/main")],
        locales: Some(vec![locale("cs"), locale("ru")]),
    };

    let mut exporter = FilesystemExporter::try_new(&root, false).unwrap();
    let stats = export(&BakedProvider, &mut exporter, &options).unwrap();

    // gc; exemplars: cs, ru, und
    assert_eq!(stats.payloads(), 4);

    let provider = Provider::from_fs(&root).unwrap();

    let gc = CodePointMapData8::load_general_category(&provider).unwrap();
    assert_eq!(gc.get_char('ж'), GeneralCategory::LowercaseLetter.0);

    let cs = UnicodeSetData::load_exemplars_main(&provider, &locale("cs")).unwrap();
    assert!(cs.contains("ch"));
    assert!(cs.contains_char('ř'));

    let error = UnicodeSetData::load_exemplars_main(&provider, &locale("de")).unwrap_err();
    assert_eq!(error.kind, DataErrorKind::IdentifierNotFound);

    let error = CodePointMapData16::load_script(&provider).unwrap_err();
    assert_eq!(error.kind, DataErrorKind::MarkerNotFound);

    // повторный экспорт в тот же каталог без перезаписи
    assert!(FilesystemExporter::try_new(&root, false).is_err());
    assert!(FilesystemExporter::try_new(&root, true).is_ok());
}

/// каталог + встроенные данные + откат локалей
#[test]
fn fork_and_fallback()
{
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("data");

    let options = ExportOptions {
        markers: vec![String::from("props/exemplars/main")],
        locales: Some(vec![locale("cs")]),
    };

    let mut exporter = FilesystemExporter::try_new(&root, false).unwrap();
    export(&BakedProvider, &mut exporter, &options).unwrap();

    let provider = Provider::from_fs(&root)
        .unwrap()
        .fork_by_key(Provider::compiled())
        .fork_by_locale(Provider::compiled())
        .enable_locale_fallback();

    // маркера нет в каталоге
    let sc = CodePointMapData16::load_script(&provider).unwrap();
    assert_eq!(sc.get_char('ж'), Script::Cyrillic.0);

    // локали нет в каталоге
    let de = UnicodeSetData::load_exemplars_main(&provider, &locale("de")).unwrap();
    assert!(de.contains_char('ß'));

    // cs-CZ -> cs
    let cs = UnicodeSetData::load_exemplars_main(&provider, &locale("cs-CZ")).unwrap();
    assert!(cs.contains("ch"));
}

/// экспорт в blob: компоненты строятся на данных из blob
#[test]
fn blob()
{
    let options = ExportOptions {
        markers: vec![
            String::from("normalizer/"),
            String::from("props/gcb@"),
            String::from("props/extpict@"),
            String::from("props/sb@"),
        ],
        locales: None,
    };

    let mut exporter = BlobExporter::new(Vec::new());
    let stats = export(&BakedProvider, &mut exporter, &options).unwrap();
    assert_eq!(stats.markers.len(), 6);

    let provider = Provider::from_blob(exporter.into_inner()).unwrap();

    let nfd = DecomposingNormalizer::try_new_nfd(&provider).unwrap();
    assert_eq!(nfd.normalize("ǻ"), "a\u{30A}\u{301}");

    let graphemes = GraphemeClusterSegmenter::try_new(&provider).unwrap();
    assert_eq!(graphemes.segment_str("e\u{301}👍🏻").collect::<Vec<_>>(), vec![0, 3, 11]);

    let sentences = SentenceSegmenter::try_new(&provider).unwrap();
    assert_eq!(sentences.segment_str("One. Two.").collect::<Vec<_>>(), vec![0, 5, 9]);

    let error = CodePointMapData8::load_general_category(&provider).unwrap_err();
    assert_eq!(error.kind, DataErrorKind::MarkerNotFound);
}
