use std::fs;
use std::path::Path;

/// текст на одном из языков из test_data/texts
pub struct Text
{
    pub name: String,
    pub content: String,
}

/// все тексты, по имени файла
pub fn texts() -> Vec<Text>
{
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("./../test_data/texts");

    let mut texts: Vec<Text> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();

            Text {
                name: path.file_stem().unwrap().to_string_lossy().into_owned(),
                content: fs::read_to_string(&path).unwrap(),
            }
        })
        .collect();

    texts.sort_by(|a, b| a.name.cmp(&b.name));

    assert!(!texts.is_empty());

    texts
}

/// текст по имени
pub fn text(name: &str) -> String
{
    texts().into_iter().find(|text| text.name == name).unwrap().content
}
