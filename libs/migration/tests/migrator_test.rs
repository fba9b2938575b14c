use migration::{Migrator, MigratorTrait, SCHEMA_MIGRATIONS};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

async fn memory_db() -> DatabaseConnection {
    database::sqlite::connect("sqlite::memory:").await.unwrap()
}

async fn names(db: &DatabaseConnection) -> Vec<(String, String)> {
    db.query_all_raw(Statement::from_string(
        DatabaseBackend::Sqlite,
        "SELECT name, priority FROM items ORDER BY id".to_owned(),
    ))
    .await
    .unwrap()
    .into_iter()
    .map(|row| {
        (
            row.try_get::<String>("", "name").unwrap(),
            row.try_get::<String>("", "priority").unwrap(),
        )
    })
    .collect()
}

#[tokio::test]
async fn test_up_creates_and_seeds_items() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    assert_eq!(
        names(&db).await,
        vec![
            ("Item 1".to_string(), "P3".to_string()),
            ("Item 2".to_string(), "P3".to_string()),
            ("Item 3".to_string(), "P3".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_schema_only_leaves_table_empty() {
    let db = memory_db().await;
    Migrator::up(&db, Some(SCHEMA_MIGRATIONS)).await.unwrap();

    assert!(names(&db).await.is_empty());
}

#[tokio::test]
async fn test_priority_check_constraint() {
    let db = memory_db().await;
    Migrator::up(&db, Some(SCHEMA_MIGRATIONS)).await.unwrap();

    let result = db
        .execute_unprepared("INSERT INTO items (name, priority) VALUES ('Bad', 'P4')")
        .await;
    assert!(result.is_err());

    db.execute_unprepared("INSERT INTO items (name) VALUES ('Defaulted')")
        .await
        .unwrap();
    assert_eq!(
        names(&db).await,
        vec![("Defaulted".to_string(), "P3".to_string())]
    );
}

#[tokio::test]
async fn test_down_drops_table() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.unwrap();

    let result = db
        .query_one_raw(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) FROM items".to_owned(),
        ))
        .await;
    assert!(result.is_err());
}
