//! Runs against a real PostgreSQL when `DATABASE_URL` is set; skipped otherwise.

use cadastro_service::{sql::TableName, CadastroStore, NewCadastro, PgCadastroStore, StoreError};
use sqlx::postgres::PgPoolOptions;

const SCRATCH_TABLE: &str = "cadastro_scratch";

/// Store over a TEMP table on a single-connection pool. The table lives only as long as
/// that session, so it disappears even when an assertion panics mid-test.
/// Only a missing `DATABASE_URL` skips; connect and DDL failures fail the test.
async fn scratch_store() -> Result<Option<PgCadastroStore>, StoreError> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skip postgres tests.");
        return Ok(None);
    };
    let pool = PgPoolOptions::new().max_connections(1).connect(&url).await?;
    sqlx::query(&format!(
        "CREATE TEMP TABLE {} (id SERIAL PRIMARY KEY, nome TEXT NOT NULL, email TEXT NOT NULL, celular TEXT NOT NULL)",
        SCRATCH_TABLE
    ))
    .execute(&pool)
    .await?;
    let name = TableName::parse(SCRATCH_TABLE).expect("valid identifier");
    Ok(Some(PgCadastroStore::new(pool, &name)))
}

#[tokio::test]
async fn postgres_round_trip() -> Result<(), StoreError> {
    let Some(store) = scratch_store().await? else {
        return Ok(());
    };
    let input = NewCadastro {
        nome: "Ana".into(),
        email: "ana@x.com".into(),
        celular: "11999999999".into(),
    };

    store.ping().await?;
    assert!(store.list().await?.is_empty());

    let created = store.create(&input).await?;
    assert!(created.id > 0);
    let id = created.id.to_string();
    assert_eq!(store.get(&id).await?, Some(created.clone()));

    let replaced = NewCadastro {
        nome: "Ana Paula".into(),
        ..input.clone()
    };
    let updated = store.update(&id, &replaced).await?.expect("row exists");
    assert_eq!(updated.nome, "Ana Paula");
    assert_eq!(updated.id, created.id);

    assert!(store.delete(&id).await?.is_some());
    assert!(store.get(&id).await?.is_none());
    assert!(store.update(&id, &input).await?.is_none());
    assert!(store.delete(&id).await?.is_none());

    // Text that cannot become an id fails inside the database.
    assert!(store.get("abc").await.is_err());

    sqlx::query(&format!("DROP TABLE IF EXISTS {}", SCRATCH_TABLE))
        .execute(store.pool())
        .await?;
    Ok(())
}
