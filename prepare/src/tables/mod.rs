//! построение таблиц data/ по файлам UCD

use std::path::Path;

use log::info;

use crate::output::Output;
use crate::ucd::{Ucd, UcdError, DERIVED_NORMALIZATION_PROPS};

pub use maps::{property_values, value_names};
pub use normalization::{Normalization, QuickCheck};
pub use scripts::ScriptExtensions;

mod maps;
mod normalization;
mod scripts;
mod sets;

/// количество кодпоинтов
pub const CODEPOINTS: usize = 0x110000;

/// все таблицы свойств и нормализации в каталог out
pub fn generate(ucd: &Ucd, out: &Path) -> Result<Output, UcdError>
{
    info!("UCD: {}", ucd.root().display());

    let unicode_data = ucd.unicode_data()?;

    info!(
        "UnicodeData: {} кодпоинтов, {} диапазонов",
        unicode_data.codepoints.len(),
        unicode_data.ranges.len()
    );

    let mut output = Output::new(out);

    maps::generate(ucd, &unicode_data, &mut output)?;

    let sc = property_values(ucd, &unicode_data, "sc")?;
    scripts::generate(ucd, &sc, &mut output)?;

    let normalization = Normalization::new(&unicode_data, &ucd.file(DERIVED_NORMALIZATION_PROPS)?)?;

    sets::generate(ucd, &unicode_data, &normalization, &mut output)?;
    normalization::generate(&normalization, &mut output)?;

    info!("записано файлов: {}", output.written().len());

    Ok(output)
}
