//! CurrencyService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use currency_types::{
        Acronym, AppError, CachedRate, CreateCurrencyRequest, Currency, CurrencyId,
        CurrencyOperation, CurrencyPatch, CurrencyRepository, NewCurrency, RepoError,
        UpdateCurrencyRequest,
    };

    use crate::CurrencyService;
    use crate::exchange_tests::tests::MockCache;

    /// In-memory repository with a call counter and a failure switch.
    pub struct MockRepo {
        currencies: Mutex<HashMap<Acronym, Currency>>,
        calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                currencies: Mutex::new(HashMap::new()),
                calls: AtomicUsize::new(0),
                failing: AtomicBool::new(false),
            }
        }

        /// Repository whose every call fails with a database error.
        pub fn failing() -> Self {
            let repo = Self::new();
            repo.failing.store(true, Ordering::SeqCst);
            repo
        }

        pub fn with_price(self, acronym: &str, price: Decimal) -> Self {
            let currency = NewCurrency::new(Acronym::parse(acronym).unwrap(), acronym.into(), price)
                .unwrap()
                .into_currency(CurrencyId::new());
            self.currencies
                .lock()
                .unwrap()
                .insert(currency.acronym.clone(), currency);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn enter(&self) -> Result<(), RepoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(RepoError::Database("connection reset".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CurrencyRepository for MockRepo {
        async fn get_by_acronym(&self, acronym: &Acronym) -> Result<Option<Currency>, RepoError> {
            self.enter()?;
            Ok(self.currencies.lock().unwrap().get(acronym).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Currency>, RepoError> {
            self.enter()?;
            let mut all: Vec<_> = self.currencies.lock().unwrap().values().cloned().collect();
            all.sort_by(|a, b| a.acronym.cmp(&b.acronym));
            Ok(all)
        }

        async fn create(&self, currency: NewCurrency) -> Result<CurrencyId, RepoError> {
            self.enter()?;
            let mut currencies = self.currencies.lock().unwrap();
            if currencies.contains_key(&currency.acronym) {
                return Err(RepoError::Conflict(currency.acronym.to_string()));
            }
            let id = CurrencyId::new();
            currencies.insert(currency.acronym.clone(), currency.into_currency(id));
            Ok(id)
        }

        async fn update(&self, acronym: &Acronym, patch: CurrencyPatch) -> Result<bool, RepoError> {
            self.enter()?;
            match self.currencies.lock().unwrap().get_mut(acronym) {
                Some(currency) => {
                    patch.apply(currency);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_by_acronym(&self, acronym: &Acronym) -> Result<(), RepoError> {
            self.enter()?;
            self.currencies.lock().unwrap().remove(acronym);
            Ok(())
        }
    }

    fn service(repo: MockRepo) -> (CurrencyService<MockRepo>, Arc<MockRepo>) {
        let repo = Arc::new(repo);
        let cache = Arc::new(MockCache::default());
        (CurrencyService::new(repo.clone(), cache), repo)
    }

    fn cached_service(
        repo: MockRepo,
        cache: MockCache,
    ) -> (CurrencyService<MockRepo>, Arc<MockCache>) {
        let cache = Arc::new(cache);
        (CurrencyService::new(Arc::new(repo), cache.clone()), cache)
    }

    fn cached_rate() -> CachedRate {
        CachedRate {
            rate: dec!(5),
            precision: 6,
        }
    }

    fn real() -> CreateCurrencyRequest {
        CreateCurrencyRequest {
            name: "Brazilian Real".into(),
            dolar_price_reference: dec!(0.2),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let (service, _) = service(MockRepo::new());

        let id = service.create("BRL", real()).await.unwrap();
        let currency = service.get("BRL").await.unwrap().unwrap();

        assert_eq!(currency.id, id);
        assert_eq!(currency.acronym.as_str(), "BRL");
        assert_eq!(currency.name, "Brazilian Real");
        assert_eq!(currency.dolar_price_reference, dec!(0.2));
    }

    #[tokio::test]
    async fn test_lowercase_acronym_is_uppercased() {
        let (service, _) = service(MockRepo::new());

        service.create("brl", real()).await.unwrap();

        assert!(service.get("BRL").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_invalid_acronym_never_reaches_repository() {
        let (service, repo) = service(MockRepo::new());

        let result = service.create("TEST-ACRONYNM", real()).await;

        assert!(matches!(result, Err(AppError::InvalidAcronym(_))));
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_negative_price_is_bad_request() {
        let (service, repo) = service(MockRepo::new());
        let req = CreateCurrencyRequest {
            name: "Real".into(),
            dolar_price_reference: dec!(-1),
        };

        let result = service.create("BRL", req).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_duplicate_is_creation_error() {
        let (service, _) = service(MockRepo::new());
        service.create("BRL", real()).await.unwrap();

        let result = service.create("BRL", real()).await;

        assert!(matches!(
            result,
            Err(AppError::CurrencyService(CurrencyOperation::Create))
        ));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let (service, _) = service(MockRepo::new());

        assert!(service.get("JPY").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_failure_is_internal() {
        let (service, _) = service(MockRepo::failing());

        let result = service.get("JPY").await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_get_all_empty_is_ok() {
        let (service, _) = service(MockRepo::new());

        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_reports_modification() {
        let (service, _) = service(MockRepo::new());
        service.create("BRL", real()).await.unwrap();

        let req = UpdateCurrencyRequest {
            name: Some("Real".into()),
            dolar_price_reference: None,
        };
        let modified = service.update("BRL", req.clone()).await.unwrap();
        let untouched = service.update("JPY", req).await.unwrap();

        assert!(modified);
        assert!(!untouched);
        let currency = service.get("BRL").await.unwrap().unwrap();
        assert_eq!(currency.name, "Real");
        assert_eq!(currency.dolar_price_reference, dec!(0.2));
    }

    #[tokio::test]
    async fn test_empty_update_is_bad_request() {
        let (service, repo) = service(MockRepo::new());

        let result = service.update("BRL", UpdateCurrencyRequest::default()).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_update_failure_is_update_error() {
        let (service, _) = service(MockRepo::failing());
        let req = UpdateCurrencyRequest {
            name: Some("Real".into()),
            dolar_price_reference: None,
        };

        let result = service.update("BRL", req).await;

        assert!(matches!(
            result,
            Err(AppError::CurrencyService(CurrencyOperation::Update))
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let (service, _) = service(MockRepo::new());
        service.create("BRL", real()).await.unwrap();

        let deleted = service.delete("BRL").await.unwrap();

        assert_eq!(deleted.as_str(), "BRL");
        assert!(service.get("BRL").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let (service, _) = service(MockRepo::new());

        assert!(service.delete("JPY").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_failure_is_deletion_error() {
        let (service, _) = service(MockRepo::failing());

        let result = service.delete("BRL").await;

        assert!(matches!(
            result,
            Err(AppError::CurrencyService(CurrencyOperation::Delete))
        ));
    }

    #[tokio::test]
    async fn test_update_evicts_cached_rates_of_the_currency() {
        let cache = MockCache::with("USDBRL", cached_rate());
        let repo = MockRepo::new().with_price("BRL", dec!(0.2));
        let (service, cache) = cached_service(repo, cache);

        let req = UpdateCurrencyRequest {
            dolar_price_reference: Some(dec!(0.25)),
            ..Default::default()
        };
        assert!(service.update("BRL", req).await.unwrap());

        assert!(cache.stored("USDBRL").is_none());
    }

    #[tokio::test]
    async fn test_update_of_missing_currency_keeps_cache() {
        let cache = MockCache::with("USDBRL", cached_rate());
        let (service, cache) = cached_service(MockRepo::new(), cache);

        let req = UpdateCurrencyRequest {
            name: Some("Real".into()),
            ..Default::default()
        };
        assert!(!service.update("BRL", req).await.unwrap());

        assert!(cache.stored("USDBRL").is_some());
    }

    #[tokio::test]
    async fn test_delete_evicts_cached_rates_of_the_currency() {
        let cache = MockCache::with("BRLEUR", cached_rate());
        let repo = MockRepo::new().with_price("BRL", dec!(0.2));
        let (service, cache) = cached_service(repo, cache);

        service.delete("BRL").await.unwrap();

        assert!(cache.stored("BRLEUR").is_none());
    }

    #[tokio::test]
    async fn test_cache_eviction_failure_does_not_fail_delete() {
        let (service, _) = cached_service(
            MockRepo::new().with_price("BRL", dec!(0.2)),
            MockCache::failing_writes(),
        );

        let acronym = service.delete("BRL").await.unwrap();
        assert_eq!(acronym.as_str(), "BRL");
    }
}
