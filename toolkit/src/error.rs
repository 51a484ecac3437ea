use std::fmt;

use thiserror::Error;

use crate::provider::DataMarkerInfo;

/// вид ошибки загрузки данных. значения стабильны и передаются как есть через границу API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u8)]
pub enum DataErrorKind
{
    #[error("неизвестная ошибка")]
    Unknown = 0,
    #[error("маркер данных не найден")]
    MarkerNotFound = 1,
    #[error("идентификатор (локаль / атрибуты) не найден")]
    IdentifierNotFound = 2,
    #[error("некорректный запрос")]
    InvalidRequest = 3,
    #[error("несогласованные данные")]
    InconsistentData = 4,
    #[error("неожиданный тип данных")]
    Downcast = 5,
    #[error("ошибка десериализации")]
    Deserialize = 6,
    #[error("ошибка")]
    Custom = 7,
    #[error("ошибка ввода-вывода")]
    Io = 8,
}

impl DataErrorKind
{
    /// ошибка этого вида без контекста
    pub fn into_error(self) -> DataError
    {
        DataError {
            kind: self,
            marker: None,
            context: None,
        }
    }

    /// ошибка этого вида для маркера
    pub fn with_marker(self, marker: DataMarkerInfo) -> DataError
    {
        self.into_error().with_marker(marker)
    }

    /// числовое значение для передачи через границу API
    pub fn code(self) -> u8
    {
        self as u8
    }

    /// вид ошибки по числовому значению; неизвестные значения - Unknown
    pub fn from_code(code: u8) -> Self
    {
        match code {
            1 => Self::MarkerNotFound,
            2 => Self::IdentifierNotFound,
            3 => Self::InvalidRequest,
            4 => Self::InconsistentData,
            5 => Self::Downcast,
            6 => Self::Deserialize,
            7 => Self::Custom,
            8 => Self::Io,
            _ => Self::Unknown,
        }
    }
}

/// ошибка загрузки данных
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct DataError
{
    pub kind: DataErrorKind,
    /// путь маркера, при загрузке которого произошла ошибка
    pub marker: Option<&'static str>,
    pub context: Option<String>,
}

impl fmt::Display for DataError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.kind)?;

        if let Some(marker) = self.marker {
            write!(f, " [{}]", marker)?;
        }

        if let Some(context) = &self.context {
            write!(f, ": {}", context)?;
        }

        Ok(())
    }
}

impl DataError
{
    /// произвольная ошибка с описанием
    pub fn custom(context: impl Into<String>) -> Self
    {
        DataErrorKind::Custom.into_error().with_context(context)
    }

    pub fn with_marker(mut self, marker: DataMarkerInfo) -> Self
    {
        self.marker = Some(marker.path);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self
    {
        self.context = Some(context.into());
        self
    }

    /// ошибка означает отсутствие данных (маркера или идентификатора), а не их повреждение
    pub fn is_missing_data(&self) -> bool
    {
        matches!(
            self.kind,
            DataErrorKind::MarkerNotFound | DataErrorKind::IdentifierNotFound
        )
    }
}

impl From<std::io::Error> for DataError
{
    fn from(error: std::io::Error) -> Self
    {
        DataErrorKind::Io.into_error().with_context(error.to_string())
    }
}

impl From<postcard::Error> for DataError
{
    fn from(error: postcard::Error) -> Self
    {
        DataErrorKind::Deserialize.into_error().with_context(error.to_string())
    }
}

impl From<serde_json::Error> for DataError
{
    fn from(error: serde_json::Error) -> Self
    {
        DataErrorKind::Deserialize.into_error().with_context(error.to_string())
    }
}

/// ошибки загрузки свойств по имени
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertiesError
{
    #[error("неизвестное свойство: {0}")]
    PropertyNotFound(String),
    #[error(transparent)]
    Data(#[from] DataError),
}
