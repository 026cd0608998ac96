use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, SqlErr, TransactionTrait,
};
use tracing::{debug, warn};

use models::{client, mechanic, service, visit, visit_service};

use crate::errors::ServiceError;
use crate::visit::domain::{ClientInfo, MechanicInfo, NewVisit, PerformedService, VisitDetails};
use crate::visit::repository::VisitRepository;

pub struct SeaOrmVisitRepository {
    pub db: DatabaseConnection,
}

/// One row of the visit join; a visit with K services yields K rows.
#[derive(Debug, Clone, FromQueryResult)]
pub(crate) struct VisitRow {
    pub visit_id: i32,
    pub date: DateTimeWithTimeZone,
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub mechanic_id: i32,
    pub licence_number: String,
    pub service_name: String,
    pub service_fee: Decimal,
}

/// Fold join rows into a visit. The first row fills the header, every row
/// adds one service. No rows means no visit.
pub(crate) fn assemble_visit(rows: Vec<VisitRow>) -> Option<VisitDetails> {
    let mut visit: Option<VisitDetails> = None;
    for row in rows {
        let details = visit.get_or_insert_with(|| VisitDetails {
            visit_id: row.visit_id,
            date: row.date,
            client: ClientInfo {
                client_id: row.client_id,
                first_name: row.first_name.clone(),
                last_name: row.last_name.clone(),
                date_of_birth: row.date_of_birth,
            },
            mechanic: MechanicInfo { mechanic_id: row.mechanic_id, licence_number: row.licence_number.clone() },
            visit_services: Vec::new(),
        });
        details.visit_services.push(PerformedService { name: row.service_name, service_fee: row.service_fee });
    }
    visit
}

/// Map a failed insert. Unique-key violations come from a concurrent writer
/// (or a repeated service) and surface as conflicts; the driver text is only logged.
fn insert_error(e: DbErr, conflict: impl FnOnce() -> String) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            warn!(%detail, "unique constraint violated on insert");
            ServiceError::Conflict(conflict())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            warn!(%detail, "foreign key violated on insert");
            ServiceError::not_found("Referenced record no longer exists.")
        }
        _ => ServiceError::Db(e.to_string()),
    }
}

pub(crate) async fn insert_visit_header<C: ConnectionTrait>(
    conn: &C,
    new_visit: &NewVisit,
    mechanic_id: i32,
) -> Result<(), ServiceError> {
    visit::insert_header(conn, new_visit.visit_id, new_visit.client_id, mechanic_id, Utc::now().into())
        .await
        .map_err(|e| insert_error(e, || format!("Visit with ID {} already exists.", new_visit.visit_id)))?;
    Ok(())
}

/// Validation and writes of the creation path, in order. Runs on the caller's
/// transaction; the first error stops the sequence.
pub(crate) async fn write_visit<C: ConnectionTrait>(conn: &C, new_visit: &NewVisit) -> Result<(), ServiceError> {
    if visit::exists(conn, new_visit.visit_id).await? {
        return Err(ServiceError::conflict(format!("Visit with ID {} already exists.", new_visit.visit_id)));
    }
    if !client::exists(conn, new_visit.client_id).await? {
        return Err(ServiceError::not_found(format!("Client with ID {} not found.", new_visit.client_id)));
    }
    let mechanic_id = mechanic::find_id_by_licence(conn, &new_visit.mechanic_licence_number)
        .await?
        .ok_or_else(|| {
            ServiceError::not_found(format!(
                "Mechanic with licence number '{}' not found.",
                new_visit.mechanic_licence_number
            ))
        })?;

    insert_visit_header(conn, new_visit, mechanic_id).await?;

    for requested in &new_visit.services {
        let service_id = service::find_id_by_name(conn, &requested.service_name)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Service '{}' not found.", requested.service_name)))?;
        visit_service::insert_line(conn, new_visit.visit_id, service_id, requested.service_fee)
            .await
            .map_err(|e| {
                insert_error(e, || {
                    format!("Service '{}' is already recorded for visit {}.", requested.service_name, new_visit.visit_id)
                })
            })?;
        debug!(visit_id = new_visit.visit_id, service_id, "visit service line written");
    }
    Ok(())
}

#[async_trait::async_trait]
impl VisitRepository for SeaOrmVisitRepository {
    /// Services come back ordered by service id. `visit_service` keeps no
    /// position column, so a request listing services out of id order is not
    /// read back in request order.
    async fn get_visit(&self, visit_id: i32) -> Result<Option<VisitDetails>, ServiceError> {
        let rows = visit::Entity::find()
            .select_only()
            .column_as(visit::Column::VisitId, "visit_id")
            .column_as(visit::Column::Date, "date")
            .column_as(client::Column::ClientId, "client_id")
            .column_as(client::Column::FirstName, "first_name")
            .column_as(client::Column::LastName, "last_name")
            .column_as(client::Column::DateOfBirth, "date_of_birth")
            .column_as(mechanic::Column::MechanicId, "mechanic_id")
            .column_as(mechanic::Column::LicenceNumber, "licence_number")
            .column_as(service::Column::Name, "service_name")
            .column_as(visit_service::Column::ServiceFee, "service_fee")
            .join(JoinType::InnerJoin, visit::Relation::Client.def())
            .join(JoinType::InnerJoin, visit::Relation::Mechanic.def())
            .join(JoinType::InnerJoin, visit::Relation::VisitService.def())
            .join(JoinType::InnerJoin, visit_service::Relation::Service.def())
            .filter(visit::Column::VisitId.eq(visit_id))
            .order_by_asc(visit_service::Column::ServiceId)
            .into_model::<VisitRow>()
            .all(&self.db)
            .await?;
        debug!(visit_id, rows = rows.len(), "visit join fetched");
        Ok(assemble_visit(rows))
    }

    async fn create_visit(&self, new_visit: &NewVisit) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        match write_visit(&txn, new_visit).await {
            Ok(()) => {
                txn.commit().await?;
                Ok(())
            }
            Err(e) => {
                if let Err(rb) = txn.rollback().await {
                    warn!(visit_id = new_visit.visit_id, error = %rb, "rollback failed");
                }
                Err(e)
            }
        }
    }
}
