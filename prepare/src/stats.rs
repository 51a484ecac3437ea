use unicode_toolkit::normalizer::{CanonicalCombiningClassMap, CanonicalComposition};
use unicode_toolkit::provider::markers::{NfdTablesV1, NfkdTablesV1};
use unicode_toolkit::provider::{load_singleton, DataProvider, ExportStats};
use unicode_toolkit::DataError;

/// информация об экспортированных данных, маркеры - по убыванию размера
pub fn print_export(stats: &ExportStats)
{
    println!(
        "\nэкспорт:\n  \
        маркеров: {}\n  \
        записей: {}\n  \
        общий размер: {}",
        stats.markers.len(),
        stats.payloads(),
        stats.bytes(),
    );

    println!();

    let mut markers: Vec<_> = stats.markers.iter().collect();
    markers.sort_by(|a, b| b.bytes.cmp(&a.bytes));

    for marker in markers {
        println!("  {}: {} ({})", marker.path, marker.bytes, marker.payloads);
    }

    println!();
}

/// информация о таблицах нормализации
pub fn print_normalizer<P: DataProvider + ?Sized>(provider: &P) -> Result<(), DataError>
{
    let tables = [
        ("NFD", load_singleton::<NfdTablesV1, P>(provider)?),
        ("NFKD", load_singleton::<NfkdTablesV1, P>(provider)?),
    ];

    for (name, tables) in tables.iter() {
        let (index, data, expansions) = (tables.index.len() * 2, tables.data.len() * 4, tables.expansions.len() * 4);

        println!(
            "\n{}:\n  \
            размер индекса: {}\n  \
            размер блока данных: {}\n  \
            размер дополнительных данных: {}\n  \
            общий размер: {}",
            name,
            index,
            data,
            expansions,
            index + data + expansions,
        );
    }

    let composition = CanonicalComposition::try_new(provider)?;
    let ccc = CanonicalCombiningClassMap::try_new(provider)?;
    let (mut pairs, mut nonstarters) = (0, 0);

    for (_, second, _) in composition.iter_pairs() {
        pairs += 1;

        if ccc.get(second) != 0 {
            nonstarters += 1;
        }
    }

    println!(
        "\nкомпозиция:\n  \
        пар (без слогов хангыль): {}\n  \
        из них со вторым нестартером: {}\n",
        pairs,
        nonstarters,
    );

    Ok(())
}
