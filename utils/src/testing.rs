use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Fresh migrated database for tests. A single connection keeps the whole
/// suite on one in-memory SQLite instance.
pub async fn setup_test_db(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url);
    opt.max_connections(1);

    let conn = Database::connect(opt).await?;
    crate::db::migrate(&conn).await?;
    Ok(conn)
}
