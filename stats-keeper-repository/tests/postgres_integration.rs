//! Integration tests for the PostgreSQL statistics repository.
//!
//! These tests require a real PostgreSQL database and use SQLx test
//! macros to ensure proper test isolation and cleanup.
//!
//! Run with: `cargo test --test postgres_integration`

use chrono::TimeZone;
use sqlx::Row;
use stats_keeper_repository::{
    ErrorKind, PostgresStatisticsRepository, StatisticsRepository,
};
use stats_keeper_shared::types::{
    ComponentKind, CounterComponent, DateComponent, StatisticComponent, StatisticEntity,
};
use uuid::Uuid;

/// Creates a counter-backed test entity.
fn make_counter_entity(name: &str, user_id: &str, count: i64) -> StatisticEntity {
    StatisticEntity {
        id: Uuid::new_v4(),
        name: name.to_string(),
        user_id: user_id.to_string(),
        component: Some(StatisticComponent::Counter(CounterComponent { count })),
    }
}

/// Creates a date-backed test entity with three timestamps.
fn make_date_entity(name: &str, user_id: &str) -> StatisticEntity {
    StatisticEntity {
        id: Uuid::new_v4(),
        name: name.to_string(),
        user_id: user_id.to_string(),
        component: Some(StatisticComponent::Date(DateComponent {
            timestamps: vec![
                chrono::Utc.timestamp_opt(1, 0).unwrap(),
                chrono::Utc.timestamp_opt(2, 0).unwrap(),
                chrono::Utc.timestamp_opt(3, 0).unwrap(),
            ],
        })),
    }
}

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_create_statistic(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool.clone());

    let entity = make_counter_entity("entity-1", "user-1", 123456);
    let created = repository.create_statistic(&entity).await.unwrap();

    // The caller-supplied id is overwritten with a generated one.
    assert_ne!(created.id, entity.id);
    assert_eq!(created.name, "entity-1");
    assert_eq!(created.user_id, "user-1");
    assert_eq!(created.component_kind(), ComponentKind::Counter);

    let got = repository.get_statistic(created.id).await.unwrap();
    assert_eq!(got, created);

    // Exactly one payload column is populated, deleted defaults false.
    let row = sqlx::query("SELECT counter, date, deleted FROM statistics WHERE id = $1")
        .bind(created.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(row.get::<Option<i64>, _>("counter"), Some(123456));
    assert!(row
        .get::<Option<Vec<chrono::DateTime<chrono::Utc>>>, _>("date")
        .is_none());
    assert!(!row.get::<bool, _>("deleted"));
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_create_date_statistic(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let entity = make_date_entity("entity-1", "user-1");
    let created = repository.create_statistic(&entity).await.unwrap();
    assert_eq!(created.component, entity.component);

    let got = repository.get_statistic(created.id).await.unwrap();
    assert_eq!(got.component, entity.component);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_get_statistic_not_found(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let err = repository.get_statistic(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "statistic not found");
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_update_statistic_name_and_date(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let created = repository
        .create_statistic(&make_date_entity("entity-1", "user-1"))
        .await
        .unwrap();

    let timestamps = vec![
        chrono::Utc.timestamp_opt(10, 0).unwrap(),
        chrono::Utc.timestamp_opt(20, 0).unwrap(),
    ];
    let values = StatisticEntity {
        id: created.id,
        name: "entity-1-updated".to_string(),
        user_id: String::new(),
        component: Some(StatisticComponent::Date(DateComponent {
            timestamps: timestamps.clone(),
        })),
    };

    let updated = repository
        .update_statistic(&fields(&["name", "date"]), &values)
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "entity-1-updated");
    assert_eq!(updated.user_id, "user-1");
    assert_eq!(
        updated.component,
        Some(StatisticComponent::Date(DateComponent { timestamps }))
    );

    let got = repository.get_statistic(created.id).await.unwrap();
    assert_eq!(got, updated);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_update_statistic_rejects_kind_change(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let created = repository
        .create_statistic(&make_counter_entity("entity-1", "user-1", 123))
        .await
        .unwrap();

    let values = StatisticEntity {
        id: created.id,
        name: String::new(),
        user_id: String::new(),
        component: Some(StatisticComponent::Date(DateComponent {
            timestamps: vec![],
        })),
    };
    let err = repository
        .update_statistic(&fields(&["date"]), &values)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "component cannot be changed from COUNTER to DATE"
    );

    // The stored entity is untouched.
    let got = repository.get_statistic(created.id).await.unwrap();
    assert_eq!(got, created);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_update_statistic_immutable_fields(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let created = repository
        .create_statistic(&make_counter_entity("entity-1", "user-1", 1))
        .await
        .unwrap();

    let err = repository
        .update_statistic(&fields(&["id", "user_id"]), &created)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "fields 'id', 'user_id' cannot be modified");
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_update_statistic_no_update(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let created = repository
        .create_statistic(&make_counter_entity("entity-1", "user-1", 1))
        .await
        .unwrap();

    let err = repository
        .update_statistic(
            &fields(&["invalid-field-1", "invalid-field-2", "invalid-field-3"]),
            &created,
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoUpdate);
    assert_eq!(err.to_string(), "no update possible");
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_update_statistic_not_found(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let values = make_counter_entity("entity-1", "user-1", 1);
    let err = repository
        .update_statistic(&fields(&["name"]), &values)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_delete_statistic(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool.clone());

    let created = repository
        .create_statistic(&make_counter_entity("entity-1", "user-1", 1))
        .await
        .unwrap();

    repository.delete_statistic(created.id).await.unwrap();

    let err = repository.get_statistic(created.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // The record is still present, only flagged.
    let row = sqlx::query("SELECT deleted FROM statistics WHERE id = $1")
        .bind(created.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(row.get::<bool, _>("deleted"));

    // Deleting again reports NotFound.
    let err = repository.delete_statistic(created.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_delete_statistic_not_found(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let err = repository
        .delete_statistic(Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "statistic not found");
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_list_user_statistics(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let a1 = repository
        .create_statistic(&make_counter_entity("a1", "user-a", 1))
        .await
        .unwrap();
    let a2 = repository
        .create_statistic(&make_date_entity("a2", "user-a"))
        .await
        .unwrap();
    repository
        .create_statistic(&make_counter_entity("b1", "user-b", 1))
        .await
        .unwrap();

    let mut listed = repository.list_user_statistics("user-a").await.unwrap();
    listed.sort_by_key(|e| e.name.clone());
    assert_eq!(listed, vec![a1.clone(), a2.clone()]);

    // Deleted entities drop out of the listing.
    repository.delete_statistic(a2.id).await.unwrap();
    let listed = repository.list_user_statistics("user-a").await.unwrap();
    assert_eq!(listed, vec![a1]);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
async fn test_list_user_statistics_empty(pool: sqlx::PgPool) {
    let repository = PostgresStatisticsRepository::new(pool);

    let listed = repository.list_user_statistics("user-none").await.unwrap();
    assert_eq!(listed, Vec::<StatisticEntity>::new());
}
