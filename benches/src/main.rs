use std::collections::BTreeMap;
use std::env;
use std::fs;

/// группы замеров в порядке вывода
const GROUPS: &[(&str, &str)] = &[
    ("nfc", "NFC"),
    ("nfkc", "NFKC"),
    ("nfd", "NFD"),
    ("nfkd", "NFKD"),
    ("dec", "DECOMPOSED NFC"),
    ("check", "IS NORMALIZED"),
    ("grapheme", "GRAPHEME CLUSTERS"),
    ("word", "WORDS"),
    ("sentence", "SENTENCES"),
];

/// время замера в микросекундах: группа -> текст -> вариант -> время
type Measurements = BTreeMap<String, BTreeMap<String, BTreeMap<String, u32>>>;

/// выведем результаты бенчмарка (вывод criterion) как CSV
fn main()
{
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Использование: {} <имя файла>", args[0]);
        return;
    }

    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(e) => {
            println!("Не удалось прочитать файл: {}", e);
            return;
        }
    };

    let measurements = parse(&contents);

    for (group, title) in GROUPS {
        if let Some(texts) = measurements.get(*group) {
            println!("{}:\n{}\n", title, make_csv(texts));
        }
    }
}

/// строка criterion вида "nfc/icu/russian  time:   [1.0 µs 1.1 µs 1.2 µs]", берём медиану
fn parse_line(line: &str) -> Option<(String, String, String, u32)>
{
    let parts: Vec<&str> = line.split_whitespace().collect();

    let mut name = parts.first()?.split('/');
    let (group, variant, text) = (name.next()?, name.next()?, name.next()?);

    let time: f64 = parts.get(4)?.parse().ok()?;
    let time = match *parts.get(5)? {
        "ns" => time / 1000.0,
        "µs" | "us" => time,
        "ms" => time * 1000.0,
        "s" => time * 1_000_000.0,
        _ => return None,
    };

    Some((group.to_owned(), text.to_owned(), variant.to_owned(), time.trunc() as u32))
}

fn parse(source: &str) -> Measurements
{
    let mut result = Measurements::new();

    for (group, text, variant, time) in source.lines().filter_map(parse_line) {
        result
            .entry(group)
            .or_default()
            .entry(text)
            .or_default()
            .insert(variant, time);
    }

    result
}

fn make_csv(texts: &BTreeMap<String, BTreeMap<String, u32>>) -> String
{
    let mut variants: Vec<&String> = texts.values().flat_map(|v| v.keys()).collect();
    variants.sort();
    variants.dedup();

    let mut result: String = variants.iter().map(|v| format!(";{}", v)).collect();
    result.push('\n');

    for (text, times) in texts {
        result.push_str(text);

        for variant in variants.iter() {
            result.push_str(format!(";{}", times.get(*variant).unwrap_or(&0)).as_str());
        }

        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn criterion_output()
    {
        let output = "\
nfc/toolkit/russian     time:   [10.100 µs 10.200 µs 10.300 µs]
nfc/icu/russian         time:   [12.000 µs 12.500 µs 13.000 µs]
nfc/icu/thai            time:   [1.5000 ms 1.6000 ms 1.7000 ms]
                        change: [-1.0% +0.5% +2.0%] (p = 0.50 > 0.05)
";

        let measurements = parse(output);
        let nfc = &measurements["nfc"];

        assert_eq!(nfc["russian"]["toolkit"], 10);
        assert_eq!(nfc["thai"]["icu"], 1600);

        assert_eq!(make_csv(nfc), ";icu;toolkit\nrussian;12;10\nthai;1600;0\n");
    }
}
