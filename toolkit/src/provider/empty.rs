use super::{DataMarkerInfo, DataProvider, DataRequest, DataResponse};
use crate::error::{DataError, DataErrorKind};

/// поставщик без данных: любой запрос - MarkerNotFound
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDataProvider;

impl DataProvider for EmptyDataProvider
{
    fn load_data(&self, marker: DataMarkerInfo, _req: DataRequest) -> Result<DataResponse, DataError>
    {
        Err(DataErrorKind::MarkerNotFound.with_marker(marker))
    }
}
