/// Entity helpers and lookups
pub mod crud_tests;

/// Transaction commit/rollback behaviour on the visit tables
pub mod transaction_tests;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{client, mechanic, schema, service};

/// In-memory database seeded with one client, one mechanic and three services.
pub(crate) async fn seeded_db() -> anyhow::Result<DatabaseConnection> {
    let db = schema::memory_db().await?;
    let dob = NaiveDate::from_ymd_opt(1990, 12, 10).ok_or_else(|| anyhow::anyhow!("bad date"))?;
    client::create(&db, 5, "Ada", "Byron", dob).await?;
    mechanic::create(&db, 3, "M-100").await?;
    service::create(&db, 1, "Oil Change").await?;
    service::create(&db, 2, "Tire Rotation").await?;
    service::create(&db, 3, "Brake Inspection").await?;
    Ok(db)
}
