#![cfg(test)]
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use models::db::{connect_with_config, DatabaseConfig};
use models::{client, mechanic, schema, service, visit, visit_service};

use crate::visit::domain::{NewVisit, RequestedService};

/// In-memory database seeded with client 5, mechanic 3 (`M-100`) and three services.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = schema::memory_db().await?;
    let dob = NaiveDate::from_ymd_opt(1990, 12, 10).ok_or_else(|| anyhow::anyhow!("bad date"))?;
    client::create(&db, 5, "Ada", "Byron", dob).await?;
    mechanic::create(&db, 3, "M-100").await?;
    service::create(&db, 1, "Oil Change").await?;
    service::create(&db, 2, "Tire Rotation").await?;
    service::create(&db, 3, "Brake Inspection").await?;
    Ok(db)
}

/// Request body builder; fees are given in cents.
pub fn new_visit(visit_id: i32, client_id: i32, licence: &str, services: &[(&str, i64)]) -> NewVisit {
    NewVisit {
        visit_id,
        client_id,
        mechanic_licence_number: licence.to_string(),
        services: services
            .iter()
            .map(|(name, cents)| RequestedService { service_name: name.to_string(), service_fee: Decimal::new(*cents, 2) })
            .collect(),
    }
}

pub async fn visit_count(db: &DatabaseConnection, visit_id: i32) -> Result<u64, anyhow::Error> {
    Ok(visit::Entity::find().filter(visit::Column::VisitId.eq(visit_id)).count(db).await?)
}

pub async fn line_count(db: &DatabaseConnection, visit_id: i32) -> Result<u64, anyhow::Error> {
    Ok(visit_service::Entity::find().filter(visit_service::Column::VisitId.eq(visit_id)).count(db).await?)
}

/// Rows seeded for one Postgres run, keyed off the current time so runs do not collide.
pub struct PgFixture {
    pub visit_id: i32,
    pub client_id: i32,
    pub mechanic_id: i32,
    pub service_id: i32,
    pub licence: String,
    pub service: String,
}

fn skip_db_tests() -> bool {
    matches!(std::env::var("SKIP_DB_TESTS").as_deref(), Ok("1") | Ok("true") | Ok("TRUE"))
}

/// Seeded Postgres connection from `DATABASE_URL`, or `None` when no server is configured.
pub async fn pg_db() -> Result<Option<(DatabaseConnection, PgFixture)>, anyhow::Error> {
    if skip_db_tests() {
        return Ok(None);
    }
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) if url.starts_with("postgres") => url,
        _ => return Ok(None),
    };
    let cfg = DatabaseConfig { url, max_connections: 4, min_connections: 1, ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    schema::create_tables(&db).await?;

    let base = 1_000_000_000 + (Utc::now().timestamp_micros() % 1_000_000_000) as i32;
    let fixture = PgFixture {
        visit_id: base,
        client_id: base,
        mechanic_id: base,
        service_id: base,
        licence: format!("PG-{base}"),
        service: format!("Pg Service {base}"),
    };
    let dob = NaiveDate::from_ymd_opt(1985, 1, 1).ok_or_else(|| anyhow::anyhow!("bad date"))?;
    client::create(&db, fixture.client_id, "Grace", "Hopper", dob).await?;
    mechanic::create(&db, fixture.mechanic_id, &fixture.licence).await?;
    service::create(&db, fixture.service_id, &fixture.service).await?;
    Ok(Some((db, fixture)))
}

pub async fn cleanup_pg(db: &DatabaseConnection, fixture: &PgFixture) -> Result<(), anyhow::Error> {
    visit_service::Entity::delete_many()
        .filter(visit_service::Column::VisitId.eq(fixture.visit_id))
        .exec(db)
        .await?;
    visit::Entity::delete_by_id(fixture.visit_id).exec(db).await?;
    client::Entity::delete_by_id(fixture.client_id).exec(db).await?;
    mechanic::Entity::delete_by_id(fixture.mechanic_id).exec(db).await?;
    service::Entity::delete_by_id(fixture.service_id).exec(db).await?;
    Ok(())
}
