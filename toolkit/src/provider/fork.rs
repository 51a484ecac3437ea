use super::{DataMarkerInfo, DataProvider, DataRequest, DataResponse};
use crate::error::{DataError, DataErrorKind};

/// при каких ошибках первого поставщика обращаться ко второму
pub trait ForkByErrorPredicate
{
    fn test(&self, marker: DataMarkerInfo, req: DataRequest, error: &DataError) -> bool;
}

/// нет маркера
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerNotFoundPredicate;

impl ForkByErrorPredicate for MarkerNotFoundPredicate
{
    fn test(&self, _marker: DataMarkerInfo, _req: DataRequest, error: &DataError) -> bool
    {
        error.kind == DataErrorKind::MarkerNotFound
    }
}

/// нет данных для локали / атрибутов
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierNotFoundPredicate;

impl ForkByErrorPredicate for IdentifierNotFoundPredicate
{
    fn test(&self, _marker: DataMarkerInfo, _req: DataRequest, error: &DataError) -> bool
    {
        error.kind == DataErrorKind::IdentifierNotFound
    }
}

/// два поставщика: второй используется, если первый вернул ошибку, подходящую под предикат
#[derive(Debug, Clone)]
pub struct ForkByErrorProvider<P0, P1, F>
{
    first: P0,
    second: P1,
    predicate: F,
}

/// развилка по отсутствию маркера
pub type ForkByMarkerProvider<P0, P1> = ForkByErrorProvider<P0, P1, MarkerNotFoundPredicate>;

impl<P0, P1, F> ForkByErrorProvider<P0, P1, F>
{
    pub fn new(first: P0, second: P1, predicate: F) -> Self
    {
        Self {
            first,
            second,
            predicate,
        }
    }

    pub fn inner(&self) -> (&P0, &P1)
    {
        (&self.first, &self.second)
    }

    pub fn into_inner(self) -> (P0, P1)
    {
        (self.first, self.second)
    }
}

impl<P0, P1, F> DataProvider for ForkByErrorProvider<P0, P1, F>
where
    P0: DataProvider,
    P1: DataProvider,
    F: ForkByErrorPredicate,
{
    fn load_data(&self, marker: DataMarkerInfo, req: DataRequest) -> Result<DataResponse, DataError>
    {
        match self.first.load_data(marker, req) {
            Err(e) if self.predicate.test(marker, req, &e) => self.second.load_data(marker, req),
            result => result,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::provider::markers::{ExemplarsMainV1, WordBreakV1};
    use crate::provider::{load, load_singleton, BakedProvider, DataLocale, EmptyDataProvider};

    #[test]
    fn by_marker()
    {
        let provider = ForkByMarkerProvider::new(EmptyDataProvider, BakedProvider, MarkerNotFoundPredicate);
        assert!(load_singleton::<WordBreakV1, _>(&provider).is_ok());

        let provider = ForkByErrorProvider::new(EmptyDataProvider, BakedProvider, IdentifierNotFoundPredicate);
        let error = load_singleton::<WordBreakV1, _>(&provider).unwrap_err();
        assert_eq!(error.kind, DataErrorKind::MarkerNotFound);
    }

    #[test]
    fn by_identifier()
    {
        let locale: DataLocale = "tlh".parse().unwrap();
        let req = DataRequest::for_locale(&locale);

        let provider = ForkByErrorProvider::new(BakedProvider, BakedProvider, IdentifierNotFoundPredicate);
        let error = load::<ExemplarsMainV1, _>(&provider, req).unwrap_err();

        assert_eq!(error.kind, DataErrorKind::IdentifierNotFound);
    }
}
