use super::markers::{self, DictionaryV1};
use super::{DataLocale, DataMarker, DataMarkerInfo, DataMarkerKind, DataProvider, DataRequest, DataResponse};
use crate::error::DataError;

/// поставщик запечённых в библиотеку данных (без ввода-вывода)
#[derive(Debug, Clone, Copy, Default)]
pub struct BakedProvider;

impl BakedProvider
{
    /// запросы, для которых есть запечённые данные маркера
    pub fn identifiers(&self, marker: DataMarkerInfo) -> Vec<(DataLocale, String)>
    {
        match marker.kind {
            DataMarkerKind::Singleton => vec![(DataLocale::UND, String::new())],
            DataMarkerKind::Locale => markers::baked_exemplar_locales(marker)
                .into_iter()
                .filter_map(|locale| locale.parse().ok())
                .map(|locale| (locale, String::new()))
                .collect(),
            DataMarkerKind::Attributes => match marker.path == DictionaryV1::INFO.path {
                true => markers::baked_dictionaries()
                    .into_iter()
                    .map(|name| (DataLocale::UND, name.to_owned()))
                    .collect(),
                false => vec![],
            },
        }
    }
}

impl DataProvider for BakedProvider
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
    {
        markers::load_baked(marker, req).map(DataResponse::new)
    }
}
