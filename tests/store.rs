//! Store access layer tests against an in-memory database.

use mercado::db;
use mercado::models::{CreateMarketRequest, CreateMovementRequest, UpdateMarketRequest};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::time::Duration;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("apply migrations");

    pool
}

fn market(nome: &str, endereco: &str) -> CreateMarketRequest {
    CreateMarketRequest {
        nome: nome.to_string(),
        endereco: endereco.to_string(),
    }
}

#[tokio::test]
async fn get_market_returns_none_for_unknown_id() {
    let pool = test_pool().await;
    let found = db::get_market(&pool, 123).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn update_and_delete_report_whether_a_row_was_affected() {
    let pool = test_pool().await;
    let id = db::add_market(&pool, &market("Mercado A", "Rua 1"))
        .await
        .unwrap();

    let req = UpdateMarketRequest {
        nome: "Mercado B".to_string(),
        endereco: "Rua 2".to_string(),
    };
    assert!(db::update_market(&pool, id, &req).await.unwrap());
    assert!(!db::update_market(&pool, id + 1, &req).await.unwrap());

    assert!(db::delete_market(&pool, id).await.unwrap());
    assert!(!db::delete_market(&pool, id).await.unwrap());
}

#[tokio::test]
async fn listing_products_without_filter_spans_all_markets() {
    let pool = test_pool().await;
    let market_a = db::add_market(&pool, &market("Mercado A", "Rua 1"))
        .await
        .unwrap();
    let market_b = db::add_market(&pool, &market("Mercado B", "Rua 2"))
        .await
        .unwrap();

    db::add_product(&pool, "Arroz", "pacote", 9.5, 10, market_a)
        .await
        .unwrap();
    db::add_product(&pool, "Café", "pacote", 19.9, 3, market_b)
        .await
        .unwrap();

    let all = db::list_products(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);

    let only_a = db::list_products(&pool, Some(market_a)).await.unwrap();
    assert_eq!(only_a.len(), 1);
    assert_eq!(only_a[0].nome, "Arroz");
}

#[tokio::test]
async fn movements_round_trip_through_the_store() {
    let pool = test_pool().await;
    let req = CreateMovementRequest {
        tipo: "saída".to_string(),
        quantidade: 2,
        data_movimentacao: "2024-05-02".to_string(),
        produto_id: 1,
        mercado_id: 1,
    };

    let id = db::add_movement(&pool, &req).await.unwrap();
    let movements = db::list_movements(&pool).await.unwrap();
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0].id, id);
    assert_eq!(movements[0].tipo, "saída");
    assert_eq!(movements[0].quantidade, 2);
}
