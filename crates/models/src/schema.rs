//! Table bootstrap for test databases.
//!
//! Production databases are provisioned externally; these helpers build the
//! same tables straight from the entity definitions so suites can run against
//! an in-memory SQLite database or a scratch Postgres schema.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, Schema,
};

use crate::{client, mechanic, service, visit, visit_service};

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt: TableCreateStatement = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Create every table used by the visit workflows, parents first.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create_table(db, client::Entity).await?;
    create_table(db, mechanic::Entity).await?;
    create_table(db, service::Entity).await?;
    create_table(db, visit::Entity).await?;
    create_table(db, visit_service::Entity).await?;
    Ok(())
}

/// Fresh in-memory SQLite database with all tables created.
///
/// The pool is pinned to a single connection: every SQLite `:memory:`
/// connection opens its own private database.
pub async fn memory_db() -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    create_tables(&db).await?;
    Ok(db)
}
