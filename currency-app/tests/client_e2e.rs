//! End-to-end flow: a real server on a file-backed SQLite database, driven
//! through the client SDK.

#![cfg(feature = "sqlite")]

use std::sync::Arc;

use currency_client::{ClientError, CurrencyClient};
use currency_hex::{CurrencyService, ExchangeService, inbound::HttpServer};
use currency_repo::{MemoryRateCache, build_repo};
use currency_types::{Acronym, UpdateCurrencyRequest};
use rate_source::StaticQuoteProvider;
use rust_decimal_macros::dec;
use tempfile::tempdir;
use tokio::net::TcpListener;

async fn spawn_server(db_url: &str) -> String {
    let repo = Arc::new(build_repo(db_url).await.unwrap());
    let cache = Arc::new(MemoryRateCache::new());
    let exchange = ExchangeService::new(
        repo.clone(),
        cache.clone(),
        Arc::new(StaticQuoteProvider::new()),
        Acronym::parse("USD").unwrap(),
    );
    let router = HttpServer::new(CurrencyService::new(repo, cache), exchange).router();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_full_currency_flow() {
    let tmp = tempdir().unwrap();
    let db_url = format!("sqlite://{}?mode=rwc", tmp.path().join("currencies.db").display());
    let client = CurrencyClient::new(spawn_server(&db_url).await);

    assert!(client.health().await.unwrap());

    // Records
    let id = client
        .create_currency("BRL", "Brazilian Real", dec!(0.5))
        .await
        .unwrap();
    let brl = client.get_currency("BRL").await.unwrap().unwrap();
    assert_eq!(brl.id, id);
    assert_eq!(client.list_currencies().await.unwrap().len(), 1);

    let duplicate = client.create_currency("BRL", "Real", dec!(0.5)).await;
    assert!(matches!(
        duplicate,
        Err(ClientError::Api { status: 500, ref message }) if message == "Error to create currency"
    ));

    // Stored prices: 1 USD / 0.5 = 2 BRL per USD, six places
    assert_eq!(client.convert("USD", "BRL", "10").await.unwrap(), "20.000000");

    // Updating the record evicts the cached rate: 1 USD / 0.25 = 4 BRL per USD
    let patch = UpdateCurrencyRequest {
        name: None,
        dolar_price_reference: Some(dec!(0.25)),
    };
    assert!(client.update_currency("BRL", &patch).await.unwrap());
    assert_eq!(client.convert("USD", "BRL", "10").await.unwrap(), "40.000000");

    // The reference currency prices at 1 without a record of its own
    assert_eq!(client.convert("USD", "USD", "3").await.unwrap(), "3.000000");

    // Unknown to the repository, answered by the static table with two places
    assert_eq!(client.convert("EUR", "USD", "1").await.unwrap(), "1.09");

    let rejected = client.convert("USD", "XXX", "1").await;
    assert!(matches!(rejected, Err(ClientError::Api { status: 403, .. })));

    // Words
    let sorted = client
        .sort_words(vec!["robin".into(), "batman".into()], "asc")
        .await
        .unwrap();
    assert_eq!(sorted, vec!["batman", "robin"]);

    let vowels = client.count_vowels(vec!["diana".into()]).await.unwrap();
    assert_eq!(vowels.get("diana"), Some(&3));

    // Delete is idempotent
    client.delete_currency("BRL").await.unwrap();
    client.delete_currency("BRL").await.unwrap();
    assert!(client.get_currency("BRL").await.unwrap().is_none());
}
