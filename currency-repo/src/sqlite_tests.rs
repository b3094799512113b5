//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use currency_types::{Acronym, CurrencyPatch, CurrencyRepository, NewCurrency, RepoError};
    use rust_decimal_macros::dec;

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn acronym(code: &str) -> Acronym {
        Acronym::parse(code).unwrap()
    }

    fn real() -> NewCurrency {
        NewCurrency::new(acronym("BRL"), "Brazilian Real".into(), dec!(0.195432)).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let repo = setup_repo().await;

        let id = repo.create(real()).await.unwrap();
        let fetched = repo.get_by_acronym(&acronym("BRL")).await.unwrap().unwrap();

        assert_eq!(fetched.id, id);
        assert_eq!(fetched.acronym.as_str(), "BRL");
        assert_eq!(fetched.name, "Brazilian Real");
        assert_eq!(fetched.dolar_price_reference, dec!(0.195432));
    }

    #[tokio::test]
    async fn test_get_missing_currency_is_none() {
        let repo = setup_repo().await;

        let result = repo.get_by_acronym(&acronym("JPY")).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_all() {
        let repo = setup_repo().await;
        assert!(repo.get_all().await.unwrap().is_empty());

        repo.create(real()).await.unwrap();
        repo.create(NewCurrency::new(acronym("EUR"), "Euro".into(), dec!(1.087)).unwrap())
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].acronym.as_str(), "BRL");
        assert_eq!(all[1].acronym.as_str(), "EUR");
    }

    #[tokio::test]
    async fn test_duplicate_acronym_conflicts() {
        let repo = setup_repo().await;
        repo.create(real()).await.unwrap();

        let result = repo.create(real()).await;

        assert!(matches!(result, Err(RepoError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let repo = setup_repo().await;
        repo.create(real()).await.unwrap();

        let patch = CurrencyPatch::new(None, Some(dec!(0.2))).unwrap();
        let modified = repo.update(&acronym("BRL"), patch).await.unwrap();

        assert!(modified);
        let fetched = repo.get_by_acronym(&acronym("BRL")).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Brazilian Real");
        assert_eq!(fetched.dolar_price_reference, dec!(0.2));
    }

    #[tokio::test]
    async fn test_update_missing_currency_reports_not_modified() {
        let repo = setup_repo().await;

        let patch = CurrencyPatch::new(Some("Yen".into()), None).unwrap();
        let modified = repo.update(&acronym("JPY"), patch).await.unwrap();

        assert!(!modified);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let repo = setup_repo().await;
        repo.create(real()).await.unwrap();

        repo.delete_by_acronym(&acronym("BRL")).await.unwrap();

        assert!(repo.get_by_acronym(&acronym("BRL")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_currency_is_ok() {
        let repo = setup_repo().await;

        let result = repo.delete_by_acronym(&acronym("JPY")).await;

        assert!(result.is_ok());
    }
}
