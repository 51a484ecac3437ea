pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// сколько раз повторяется текст в замере
const REPEAT: usize = 2;

/// группа замеров: для каждого варианта - подготовка и замеряемое выражение над каждым текстом
#[macro_export]
macro_rules! group {
    ($fn: ident, $group: expr, $texts: expr, $(($name: expr, $setup: expr, |$s: ident, $t: ident| $body: expr)),+) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let texts = $texts;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            $(
                let $s = $setup;

                for (text_name, text) in texts.iter() {
                    group.bench_with_input(
                        criterion::BenchmarkId::new($name, text_name),
                        text.as_str(),
                        |b, $t| b.iter(|| $body),
                    );
                }
            )+

            group.finish();
        }
    };
}

/// тексты из test_data/texts: исходные или разложенные (*_nfd)
pub fn texts(decomposed: bool) -> Vec<(String, String)>
{
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("./../test_data/texts");

    let mut data: Vec<(String, String)> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter_map(|path| {
            let name = path.file_stem()?.to_str()?.to_owned();

            match name.ends_with("_nfd") == decomposed {
                true => Some((name, std::fs::read_to_string(&path).unwrap().repeat(REPEAT))),
                false => None,
            }
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}
