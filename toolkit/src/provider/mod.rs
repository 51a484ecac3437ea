//! поставщики данных: запечённые данные, файловая система, blob, композиция поставщиков

use std::any::Any;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use baked::BakedProvider;
pub use blob::{BlobDataProvider, BlobSchema};
pub use empty::EmptyDataProvider;
pub use export::{export, BlobExporter, DataExporter, ExportOptions, ExportStats, FilesystemExporter, MarkerStats};
pub use fallback::{LocaleFallbackProvider, LocaleFallbacker};
pub use fork::{
    ForkByErrorPredicate, ForkByErrorProvider, ForkByMarkerProvider, IdentifierNotFoundPredicate,
    MarkerNotFoundPredicate,
};
pub use fs::{FsDataProvider, Manifest};
pub use locale::{DataLocale, LocaleParseError, UND};

use crate::error::{DataError, DataErrorKind};

pub mod markers;

mod baked;
mod blob;
mod empty;
mod export;
mod fallback;
mod fork;
mod fs;
mod locale;

/// как маркер адресует данные
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataMarkerKind
{
    /// одна структура, локаль не учитывается
    Singleton,
    /// данные зависят от локали
    Locale,
    /// данные выбираются по атрибутам (имя словаря, модели)
    Attributes,
}

/// описание маркера данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataMarkerInfo
{
    /// путь вида props/gc@1
    pub path: &'static str,
    pub kind: DataMarkerKind,
}

impl DataMarkerInfo
{
    pub const fn singleton(path: &'static str) -> Self
    {
        Self {
            path,
            kind: DataMarkerKind::Singleton,
        }
    }

    pub const fn locale(path: &'static str) -> Self
    {
        Self {
            path,
            kind: DataMarkerKind::Locale,
        }
    }

    pub const fn attributes(path: &'static str) -> Self
    {
        Self {
            path,
            kind: DataMarkerKind::Attributes,
        }
    }

    pub fn is_singleton(&self) -> bool
    {
        self.kind == DataMarkerKind::Singleton
    }

    /// идентификатор данных внутри маркера для файловой системы и blob
    pub fn identifier(&self, req: DataRequest) -> String
    {
        match self.kind {
            DataMarkerKind::Singleton => String::from("und"),
            DataMarkerKind::Locale => req.locale.to_string(),
            DataMarkerKind::Attributes => match req.attributes.is_empty() {
                true => String::from("und"),
                false => req.attributes.to_owned(),
            },
        }
    }
}

impl fmt::Display for DataMarkerInfo
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.path)
    }
}

/// типизированный маркер данных
pub trait DataMarker: 'static
{
    type DataStruct: Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    const INFO: DataMarkerInfo;
}

/// запрос данных
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRequest<'a>
{
    pub locale: &'a DataLocale,
    /// атрибуты (имя словаря, модели), пустая строка - без атрибутов
    pub attributes: &'a str,
}

impl<'a> DataRequest<'a>
{
    pub fn for_locale(locale: &'a DataLocale) -> Self
    {
        Self {
            locale,
            attributes: "",
        }
    }

    pub fn for_attributes(attributes: &'a str) -> Self
    {
        Self {
            locale: &UND,
            attributes,
        }
    }
}

impl Default for DataRequest<'_>
{
    fn default() -> Self
    {
        Self::for_locale(&UND)
    }
}

impl fmt::Display for DataRequest<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.locale)?;

        if !self.attributes.is_empty() {
            write!(f, "/{}", self.attributes)?;
        }

        Ok(())
    }
}

/// данные без типа: структура в памяти или сериализованный (postcard) буфер
#[derive(Clone)]
pub enum AnyPayload
{
    Structured(Arc<dyn Any + Send + Sync>),
    Buffer(Arc<[u8]>),
}

impl AnyPayload
{
    pub fn from_struct<T: Any + Send + Sync>(data: T) -> Self
    {
        Self::Structured(Arc::new(data))
    }

    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self
    {
        Self::Buffer(bytes.into())
    }

    /// получаем данные маркера M
    pub fn downcast<M: DataMarker>(self) -> Result<M::DataStruct, DataError>
    {
        match self {
            Self::Structured(any) => match any.downcast::<M::DataStruct>() {
                Ok(data) => Ok(Arc::try_unwrap(data).unwrap_or_else(|data| (*data).clone())),
                Err(_) => Err(DataErrorKind::Downcast.with_marker(M::INFO)),
            },
            Self::Buffer(bytes) => {
                postcard::from_bytes::<M::DataStruct>(&bytes).map_err(|e| DataError::from(e).with_marker(M::INFO))
            }
        }
    }
}

impl fmt::Debug for AnyPayload
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::Structured(_) => f.write_str("AnyPayload::Structured"),
            Self::Buffer(bytes) => write!(f, "AnyPayload::Buffer({} байт)", bytes.len()),
        }
    }
}

/// метаданные ответа
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataResponseMetadata
{
    /// локаль, данные которой фактически возвращены (если отличается от запрошенной)
    pub locale: Option<DataLocale>,
}

/// ответ поставщика
#[derive(Debug, Clone)]
pub struct DataResponse
{
    pub metadata: DataResponseMetadata,
    pub payload: AnyPayload,
}

impl DataResponse
{
    pub fn new(payload: AnyPayload) -> Self
    {
        Self {
            metadata: DataResponseMetadata::default(),
            payload,
        }
    }
}

/// поставщик данных
pub trait DataProvider
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>;
}

impl<P: DataProvider + ?Sized> DataProvider for &P
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
    {
        (**self).load_data(marker, req)
    }
}

impl<P: DataProvider + ?Sized> DataProvider for Box<P>
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
    {
        (**self).load_data(marker, req)
    }
}

impl<P: DataProvider + ?Sized> DataProvider for Arc<P>
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
    {
        (**self).load_data(marker, req)
    }
}

/// загрузка данных маркера для запроса
pub fn load<M, P>(provider: &P, req: DataRequest) -> Result<M::DataStruct, DataError>
where
    M: DataMarker,
    P: DataProvider + ?Sized,
{
    let response = provider.load_data(M::INFO, req)?;

    debug!(
        "загружены данные {} для {}{}",
        M::INFO,
        req,
        response
            .metadata
            .locale
            .as_ref()
            .map(|l| format!(" (использована локаль {})", l))
            .unwrap_or_default()
    );

    response.payload.downcast::<M>()
}

/// загрузка данных маркера, не зависящего от локали
pub fn load_singleton<M, P>(provider: &P) -> Result<M::DataStruct, DataError>
where
    M: DataMarker,
    P: DataProvider + ?Sized,
{
    load::<M, P>(provider, DataRequest::default())
}

/// загрузка необязательных данных: отсутствие маркера или идентификатора - не ошибка
pub fn load_optional<M, P>(provider: &P, req: DataRequest) -> Result<Option<M::DataStruct>, DataError>
where
    M: DataMarker,
    P: DataProvider + ?Sized,
{
    match load::<M, P>(provider, req) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.is_missing_data() => Ok(None),
        Err(e) => Err(e),
    }
}

/// поставщик общего вида, собираемый из встроенных данных, файловой системы или blob
pub struct Provider
{
    inner: Box<dyn DataProvider + Send + Sync>,
}

impl Provider
{
    /// запечённые данные
    pub fn compiled() -> Self
    {
        Self::new(BakedProvider)
    }

    /// данные в каталоге, созданном FilesystemExporter
    pub fn from_fs(root: impl AsRef<Path>) -> Result<Self, DataError>
    {
        Ok(Self::new(FsDataProvider::try_new(root)?))
    }

    /// данные в blob, созданном BlobExporter
    pub fn from_blob(blob: impl Into<Arc<[u8]>>) -> Result<Self, DataError>
    {
        Ok(Self::new(BlobDataProvider::try_new(blob)?))
    }

    /// поставщик без данных
    pub fn empty() -> Self
    {
        Self::new(EmptyDataProvider)
    }

    pub fn new(provider: impl DataProvider + Send + Sync + 'static) -> Self
    {
        Self {
            inner: Box::new(provider),
        }
    }

    /// если у этого поставщика нет маркера - обращаемся к другому
    pub fn fork_by_key(self, other: Provider) -> Self
    {
        Self::new(ForkByErrorProvider::new(self, other, MarkerNotFoundPredicate))
    }

    /// если у этого поставщика нет данных для локали / атрибутов - обращаемся к другому
    pub fn fork_by_locale(self, other: Provider) -> Self
    {
        Self::new(ForkByErrorProvider::new(self, other, IdentifierNotFoundPredicate))
    }

    /// включить откат локалей со встроенной таблицей
    pub fn enable_locale_fallback(self) -> Self
    {
        self.enable_locale_fallback_with(LocaleFallbacker::new())
    }

    pub fn enable_locale_fallback_with(self, fallbacker: LocaleFallbacker) -> Self
    {
        Self::new(LocaleFallbackProvider::new(self, fallbacker))
    }
}

impl DataProvider for Provider
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
    {
        self.inner.load_data(marker, req)
    }
}

impl fmt::Debug for Provider
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str("Provider")
    }
}
