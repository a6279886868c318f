//! Runs against a real PostgreSQL database when `DATABASE_URL` is set;
//! each test returns early otherwise.

use std::sync::Arc;

use chrono::{TimeZone, Timelike, Utc};

use transaction_ledger::{
    db,
    error::AppError,
    models::transaction::{CreateTransactionRequest, NewTransaction},
    repository::{PgTransactionRepository, TransactionRepository},
    services::TransactionService,
};

async fn setup_repository() -> Option<PgTransactionRepository> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(v) => v,
        Err(_) => {
            println!("Skipping Postgres test: DATABASE_URL not set");
            return None;
        }
    };

    let pool = db::create_pool(&database_url, 2)
        .await
        .expect("Failed to connect to test DB");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    Some(PgTransactionRepository::new(pool))
}

fn request(amount: i64, currency: &str) -> CreateTransactionRequest {
    CreateTransactionRequest {
        id: None,
        amount,
        currency: currency.to_string(),
        description: None,
        timestamp: None,
    }
}

#[tokio::test]
async fn save_returns_stored_row_with_timestamp_mapping() {
    let Some(repo) = setup_repository().await else {
        return;
    };

    // Nanosecond precision; Postgres keeps microseconds
    let occurred = Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 30, 0)
        .unwrap()
        .with_nanosecond(123_456_789)
        .unwrap();

    let stored = repo
        .save(NewTransaction {
            amount: -4200,
            currency: "EUR".to_string(),
            description: Some("Rent".to_string()),
            timestamp: occurred,
        })
        .await
        .expect("save");

    assert!(stored.id > 0);
    assert_eq!(stored.amount, -4200);
    assert_eq!(stored.currency, "EUR");
    assert_eq!(stored.description.as_deref(), Some("Rent"));
    assert_eq!(stored.timestamp.timestamp(), occurred.timestamp());
    assert_eq!(stored.timestamp.nanosecond(), 123_456_000);

    let fetched = repo.find_by_id(stored.id).await.expect("find").expect("row");
    assert_eq!(fetched, stored);
}

#[tokio::test]
async fn create_then_get_round_trips_through_service() {
    let Some(repo) = setup_repository().await else {
        return;
    };
    let service = TransactionService::new(Arc::new(repo));

    let created = service.create(request(100, "usd")).await.expect("create");
    let fetched = service.get_by_id(created.id).await.expect("get");

    assert_eq!(fetched, created);
    assert_eq!(fetched.currency, "USD");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let Some(repo) = setup_repository().await else {
        return;
    };
    let service = TransactionService::new(Arc::new(repo));

    let created = service.create(request(0, "GBP")).await.expect("create");
    service.delete(created.id).await.expect("delete");

    assert!(matches!(
        service.get_by_id(created.id).await,
        Err(AppError::NotFound(id)) if id == created.id
    ));
}

#[tokio::test]
async fn second_delete_is_not_found() {
    let Some(repo) = setup_repository().await else {
        return;
    };

    let stored = repo
        .save(NewTransaction {
            amount: 1,
            currency: "USD".to_string(),
            description: None,
            timestamp: Utc::now(),
        })
        .await
        .expect("save");

    assert!(repo.delete_by_id(stored.id).await.expect("delete"));
    assert!(!repo.delete_by_id(stored.id).await.expect("delete"));

    let service = TransactionService::new(Arc::new(repo));
    assert!(matches!(
        service.delete(stored.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn find_all_contains_created_rows_in_id_order() {
    let Some(repo) = setup_repository().await else {
        return;
    };
    let service = TransactionService::new(Arc::new(repo));

    let mut created = Vec::new();
    for amount in [300, -100, 200] {
        created.push(service.create(request(amount, "JPY")).await.expect("create"));
    }

    let listed = service.list().await.expect("list");
    for transaction in &created {
        assert!(listed.contains(transaction));
    }

    let ids: Vec<i64> = listed.iter().map(|t| t.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn ping_succeeds_against_live_database() {
    let Some(repo) = setup_repository().await else {
        return;
    };

    repo.ping().await.expect("ping");
    assert_eq!(repo.backend(), "postgres");
}
