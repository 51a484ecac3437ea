use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::blob::BLOB_VERSION;
use super::fs::{Manifest, MANIFEST_FILE};
use super::{markers, BakedProvider, BlobSchema, DataLocale, DataMarkerInfo, DataProvider, DataRequest};
use crate::error::{DataError, DataErrorKind};

/// получатель экспортируемых данных
pub trait DataExporter
{
    /// записать сериализованные данные маркера для идентификатора
    fn put_payload(&mut self, marker: DataMarkerInfo, identifier: &str, bytes: &[u8]) -> Result<(), DataError>;

    /// завершить экспорт
    fn close(&mut self) -> Result<(), DataError>;
}

/// экспорт в каталог для FsDataProvider
#[derive(Debug)]
pub struct FilesystemExporter
{
    root: PathBuf,
}

impl FilesystemExporter
{
    /// каталог не должен существовать, если не разрешена перезапись
    pub fn try_new(root: impl AsRef<Path>, overwrite: bool) -> Result<Self, DataError>
    {
        let root = root.as_ref().to_path_buf();

        if root.exists() {
            match overwrite {
                true => fs::remove_dir_all(&root)?,
                false => {
                    return Err(DataErrorKind::InvalidRequest
                        .into_error()
                        .with_context(format!("каталог уже существует: {}", root.display())))
                }
            }
        }

        fs::create_dir_all(&root)?;

        Ok(Self { root })
    }
}

impl DataExporter for FilesystemExporter
{
    fn put_payload(&mut self, marker: DataMarkerInfo, identifier: &str, bytes: &[u8]) -> Result<(), DataError>
    {
        let dir = self.root.join(marker.path);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{}.bin", identifier)), bytes)?;

        Ok(())
    }

    fn close(&mut self) -> Result<(), DataError>
    {
        let manifest = serde_json::to_string_pretty(&Manifest::default())?;
        fs::write(self.root.join(MANIFEST_FILE), manifest)?;

        Ok(())
    }
}

/// экспорт в blob для BlobDataProvider
pub struct BlobExporter<W: Write>
{
    schema: BlobSchema,
    sink: W,
}

impl<W: Write> BlobExporter<W>
{
    pub fn new(sink: W) -> Self
    {
        Self {
            schema: BlobSchema {
                version: BLOB_VERSION,
                ..Default::default()
            },
            sink,
        }
    }

    pub fn into_inner(self) -> W
    {
        self.sink
    }
}

impl<W: Write> DataExporter for BlobExporter<W>
{
    fn put_payload(&mut self, marker: DataMarkerInfo, identifier: &str, bytes: &[u8]) -> Result<(), DataError>
    {
        self.schema
            .entries
            .entry(marker.path.to_owned())
            .or_default()
            .insert(identifier.to_owned(), bytes.to_vec());

        Ok(())
    }

    fn close(&mut self) -> Result<(), DataError>
    {
        let blob = postcard::to_allocvec(&self.schema)?;
        self.sink.write_all(&blob)?;
        self.sink.flush()?;

        Ok(())
    }
}

/// что экспортировать
#[derive(Debug, Clone, Default)]
pub struct ExportOptions
{
    /// префиксы путей маркеров, пусто - все маркеры
    pub markers: Vec<String>,
    /// локали для маркеров, зависящих от локали, None - все доступные
    pub locales: Option<Vec<DataLocale>>,
}

impl ExportOptions
{
    fn accepts_marker(&self, marker: DataMarkerInfo) -> bool
    {
        self.markers.is_empty() || self.markers.iter().any(|prefix| marker.path.starts_with(prefix.as_str()))
    }

    fn accepts_locale(&self, locale: &DataLocale) -> bool
    {
        match &self.locales {
            Some(locales) => locale.is_und() || locales.contains(locale),
            None => true,
        }
    }
}

/// статистика экспорта по маркеру
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerStats
{
    pub path: &'static str,
    pub payloads: usize,
    pub bytes: usize,
}

/// статистика экспорта
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats
{
    pub markers: Vec<MarkerStats>,
}

impl ExportStats
{
    pub fn payloads(&self) -> usize
    {
        self.markers.iter().map(|m| m.payloads).sum()
    }

    pub fn bytes(&self) -> usize
    {
        self.markers.iter().map(|m| m.bytes).sum()
    }
}

/// экспорт данных поставщика. перечень идентификаторов берётся из запечённых данных
pub fn export<P: DataProvider + ?Sized>(
    provider: &P,
    exporter: &mut dyn DataExporter,
    options: &ExportOptions,
) -> Result<ExportStats, DataError>
{
    let mut stats = ExportStats::default();

    for marker in markers::ALL.iter().copied().filter(|m| options.accepts_marker(*m)) {
        let mut marker_stats = MarkerStats {
            path: marker.path,
            ..Default::default()
        };

        for (locale, attributes) in BakedProvider.identifiers(marker) {
            if !options.accepts_locale(&locale) {
                continue;
            }

            let req = DataRequest {
                locale: &locale,
                attributes: &attributes,
            };

            let response = match provider.load_data(marker, req) {
                Ok(response) => response,
                Err(e) if e.is_missing_data() => {
                    debug!("{}: нет данных для {}", marker, req);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let bytes = markers::serialize_payload(marker, response.payload)?;
            exporter.put_payload(marker, &marker.identifier(req), &bytes)?;

            marker_stats.payloads += 1;
            marker_stats.bytes += bytes.len();
        }

        if marker_stats.payloads != 0 {
            info!("{}: записей - {}, байт - {}", marker, marker_stats.payloads, marker_stats.bytes);
            stats.markers.push(marker_stats);
        }
    }

    exporter.close()?;

    Ok(stats)
}
