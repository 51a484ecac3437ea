use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{AnyPayload, DataMarkerInfo, DataProvider, DataRequest, DataResponse};
use crate::error::{DataError, DataErrorKind};

/// версия формата blob
pub const BLOB_VERSION: u32 = 1;

/// содержимое blob: путь маркера -> идентификатор -> данные в postcard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobSchema
{
    pub version: u32,
    pub entries: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
}

/// поставщик данных из одного буфера
#[derive(Debug, Clone)]
pub struct BlobDataProvider
{
    schema: Arc<BlobSchema>,
}

impl BlobDataProvider
{
    pub fn try_new(blob: impl Into<Arc<[u8]>>) -> Result<Self, DataError>
    {
        let blob: Arc<[u8]> = blob.into();
        let schema: BlobSchema = postcard::from_bytes(&blob)?;

        if schema.version != BLOB_VERSION {
            return Err(DataErrorKind::Deserialize
                .into_error()
                .with_context(format!("неподдерживаемая версия blob: {}", schema.version)));
        }

        Ok(Self {
            schema: Arc::new(schema),
        })
    }

    /// количество записей
    pub fn len(&self) -> usize
    {
        self.schema.entries.values().map(|ids| ids.len()).sum()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}

impl DataProvider for BlobDataProvider
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
    {
        let ids = self
            .schema
            .entries
            .get(marker.path)
            .ok_or_else(|| DataErrorKind::MarkerNotFound.with_marker(marker))?;

        let bytes = ids
            .get(&marker.identifier(req))
            .ok_or_else(|| DataErrorKind::IdentifierNotFound.with_marker(marker).with_context(req.to_string()))?;

        Ok(DataResponse::new(AnyPayload::from_bytes(bytes.as_slice())))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn version()
    {
        let blob = postcard::to_allocvec(&BlobSchema {
            version: 2,
            entries: BTreeMap::new(),
        })
        .unwrap();

        let error = BlobDataProvider::try_new(blob).unwrap_err();
        assert_eq!(error.kind, DataErrorKind::Deserialize);

        let error = BlobDataProvider::try_new(Vec::<u8>::new()).unwrap_err();
        assert_eq!(error.kind, DataErrorKind::Deserialize);
    }

    #[test]
    fn empty()
    {
        let blob = postcard::to_allocvec(&BlobSchema {
            version: BLOB_VERSION,
            entries: BTreeMap::new(),
        })
        .unwrap();

        let provider = BlobDataProvider::try_new(blob).unwrap();
        assert!(provider.is_empty());

        let error = provider
            .load_data(DataMarkerInfo::singleton("props/gc@1"), DataRequest::default())
            .unwrap_err();
        assert_eq!(error.kind, DataErrorKind::MarkerNotFound);
    }
}
