use std::collections::HashMap;

use lazy_static::lazy_static;
use log::warn;

use super::{DataLocale, DataMarkerInfo, DataMarkerKind, DataProvider, DataRequest, DataResponse};
use crate::error::{DataError, DataErrorKind};

lazy_static! {
    /// родительские локали, отличные от простого отбрасывания региона / скрипта
    static ref PARENT_LOCALES: HashMap<String, &'static str> = {
        let mut parents = HashMap::new();

        for region in ["AU", "CA", "GB", "IE", "IN", "NZ", "SG", "ZA", "150"] {
            parents.insert(format!("en-{}", region), "en-001");
        }

        for region in ["AT", "BE", "CH", "DE", "DK", "FI", "NL", "SE"] {
            parents.insert(format!("en-{}", region), "en-150");
        }

        for region in [
            "AR", "BO", "BR", "BZ", "CL", "CO", "CR", "CU", "DO", "EC", "GT", "HN", "MX", "NI", "PA", "PE", "PR",
            "PY", "SV", "US", "UY", "VE",
        ] {
            parents.insert(format!("es-{}", region), "es-419");
        }

        for region in ["AO", "CH", "CV", "GQ", "GW", "LU", "MO", "MZ", "ST", "TL"] {
            parents.insert(format!("pt-{}", region), "pt-PT");
        }

        parents.insert(String::from("zh-Hant-MO"), "zh-Hant-HK");

        // письменность, отличная от основной для языка: откат сразу в корень
        for locale in [
            "az-Cyrl", "bs-Cyrl", "en-Dsrt", "en-Shaw", "ff-Adlm", "ff-Arab", "ha-Arab", "hi-Latn", "kk-Arab", "ks-Deva",
            "mn-Mong", "ms-Arab", "pa-Arab", "shi-Latn", "sr-Latn", "uz-Arab", "uz-Cyrl", "vai-Latn", "yue-Hans",
            "zh-Hant",
        ] {
            parents.insert(String::from(locale), "und");
        }

        parents
    };
}

/// цепочка откатов локалей: варианты -> родительская локаль -> без региона -> без скрипта -> und
#[derive(Debug, Clone, Default)]
pub struct LocaleFallbacker
{
    /// дополнительные родительские локали, имеют приоритет над встроенной таблицей
    parents: HashMap<String, DataLocale>,
}

impl LocaleFallbacker
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// добавить родительскую локаль
    pub fn with_parent(mut self, locale: &DataLocale, parent: DataLocale) -> Self
    {
        self.parents.insert(locale.to_string(), parent);
        self
    }

    /// следующая локаль цепочки
    pub fn next(&self, locale: &DataLocale) -> Option<DataLocale>
    {
        if !locale.variants().is_empty() {
            return Some(locale.without_variants());
        }

        let key = locale.to_string();

        if let Some(parent) = self.parents.get(&key) {
            return Some(parent.clone());
        }

        if let Some(parent) = PARENT_LOCALES.get(key.as_str()).and_then(|p| p.parse().ok()) {
            return Some(parent);
        }

        match (locale.region(), locale.script(), locale.is_und()) {
            (Some(_), _, _) => Some(locale.without_region()),
            (None, Some(_), _) => Some(locale.without_script()),
            (None, None, false) => Some(DataLocale::UND),
            (None, None, true) => None,
        }
    }

    /// вся цепочка, начиная с самой локали и заканчивая und
    pub fn chain(&self, locale: &DataLocale) -> Vec<DataLocale>
    {
        let mut chain = vec![locale.clone()];

        while let Some(next) = chain.last().and_then(|last| self.next(last)) {
            // защита от циклов в пользовательской таблице
            if chain.contains(&next) {
                break;
            }
            chain.push(next);
        }

        chain
    }
}

/// поставщик, перебирающий цепочку откатов локали, пока данные не будут найдены
#[derive(Debug, Clone)]
pub struct LocaleFallbackProvider<P>
{
    inner: P,
    fallbacker: LocaleFallbacker,
}

impl<P> LocaleFallbackProvider<P>
{
    pub fn new(inner: P, fallbacker: LocaleFallbacker) -> Self
    {
        Self { inner, fallbacker }
    }

    pub fn inner(&self) -> &P
    {
        &self.inner
    }
}

impl<P: DataProvider> DataProvider for LocaleFallbackProvider<P>
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
    {
        if marker.kind != DataMarkerKind::Locale {
            return self.inner.load_data(marker, req);
        }

        let mut last_error = None;

        for locale in self.fallbacker.chain(req.locale) {
            let request = DataRequest {
                locale: &locale,
                attributes: req.attributes,
            };

            match self.inner.load_data(marker, request) {
                Ok(mut response) => {
                    if locale != *req.locale {
                        warn!("{}: нет данных для {}, использована локаль {}", marker, req.locale, locale);
                        response.metadata.locale = Some(locale);
                    }

                    return Ok(response);
                }
                Err(e) if e.kind == DataErrorKind::IdentifierNotFound => last_error = Some(e),
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| DataErrorKind::IdentifierNotFound.with_marker(marker)))
    }
}
