use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnyPayload, DataMarkerInfo, DataProvider, DataRequest, DataResponse};
use crate::error::{DataError, DataErrorKind};

/// имя файла описания каталога с данными
pub const MANIFEST_FILE: &str = "manifest.json";
/// формат сериализации данных
pub const SYNTAX: &str = "postcard";
/// версия структуры каталога
pub const VERSION: u32 = 1;

/// описание каталога с данными
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest
{
    pub syntax: String,
    pub version: u32,
}

impl Default for Manifest
{
    fn default() -> Self
    {
        Self {
            syntax: SYNTAX.to_owned(),
            version: VERSION,
        }
    }
}

/// поставщик данных из каталога: <корень>/<путь маркера>/<идентификатор>.bin
#[derive(Debug, Clone)]
pub struct FsDataProvider
{
    root: PathBuf,
}

impl FsDataProvider
{
    pub fn try_new(root: impl AsRef<Path>) -> Result<Self, DataError>
    {
        let root = root.as_ref().to_path_buf();
        let manifest_path = root.join(MANIFEST_FILE);

        let manifest = fs::read_to_string(&manifest_path)
            .map_err(|e| DataError::from(e).with_context(format!("{}", manifest_path.display())))?;
        let manifest: Manifest = serde_json::from_str(&manifest)?;

        if manifest.syntax != SYNTAX || manifest.version != VERSION {
            return Err(DataErrorKind::Deserialize.into_error().with_context(format!(
                "неподдерживаемый формат каталога: {} v{}",
                manifest.syntax, manifest.version
            )));
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path
    {
        &self.root
    }
}

impl DataProvider for FsDataProvider
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
    {
        let dir = self.root.join(marker.path);

        if !dir.is_dir() {
            return Err(DataErrorKind::MarkerNotFound.with_marker(marker));
        }

        let path = dir.join(format!("{}.bin", marker.identifier(req)));

        match fs::read(&path) {
            Ok(bytes) => Ok(DataResponse::new(AnyPayload::from_bytes(bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(DataErrorKind::IdentifierNotFound.with_marker(marker).with_context(req.to_string()))
            }
            Err(e) => Err(DataError::from(e).with_marker(marker)),
        }
    }
}
