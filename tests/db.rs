use diesel::RunQueryDsl;
use diesel::sql_types::Integer;

mod common;

#[derive(diesel::QueryableByName)]
struct Flag {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn test_creates_migrated_database() {
    let test_db = common::TestDb::new("test_creates_migrated_database.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");
    assert!(corporate_site::db::run_migrations(&test_db.pool()).is_ok());
}

#[test]
fn test_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new("test_connections_enforce_foreign_keys.db");
    let mut conn = test_db.pool().get().unwrap();
    let flags = diesel::sql_query("PRAGMA foreign_keys")
        .load::<Flag>(&mut conn)
        .unwrap();
    assert_eq!(flags[0].foreign_keys, 1);
}
