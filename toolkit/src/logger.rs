use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// инициализация журнала с уровнем по умолчанию (warn), RUST_LOG учитывается.
/// повторные вызовы ничего не делают
pub fn init() -> bool
{
    init_with_level(LevelFilter::Warn)
}

/// инициализация журнала с заданным уровнем. возвращает true, если журнал был инициализирован этим вызовом
pub fn init_with_level(level: LevelFilter) -> bool
{
    let mut initialized = false;

    INIT.call_once(|| {
        initialized = env_logger::builder()
            .filter_level(level)
            .parse_default_env()
            .try_init()
            .is_ok();
    });

    initialized
}
