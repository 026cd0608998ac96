use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, ColumnTrait, TransactionTrait};
use anyhow::Result;

use super::seeded_db;
use crate::{visit, visit_service};

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = seeded_db().await?;

    let txn = db.begin().await?;
    visit::insert_header(&txn, 10, 5, 3, Utc::now().into()).await?;
    visit_service::insert_line(&txn, 10, 1, Decimal::new(4999, 2)).await?;
    txn.commit().await?;

    assert!(visit::exists(&db, 10).await?);
    let lines = visit_service::Entity::find()
        .filter(visit_service::Column::VisitId.eq(10))
        .count(&db)
        .await?;
    assert_eq!(lines, 1);
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = seeded_db().await?;

    let txn = db.begin().await?;
    visit::insert_header(&txn, 11, 5, 3, Utc::now().into()).await?;
    visit_service::insert_line(&txn, 11, 1, Decimal::new(4999, 2)).await?;
    txn.rollback().await?;

    assert!(!visit::exists(&db, 11).await?);
    assert_eq!(visit_service::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// A duplicate line aborts the transaction and nothing is kept
#[tokio::test]
async fn test_transaction_error_handling() -> Result<()> {
    let db = seeded_db().await?;

    let result = async {
        let txn = db.begin().await?;
        visit::insert_header(&txn, 12, 5, 3, Utc::now().into()).await?;
        visit_service::insert_line(&txn, 12, 1, Decimal::new(4999, 2)).await?;
        // (visit_id, service_id) is the primary key
        if let Err(e) = visit_service::insert_line(&txn, 12, 1, Decimal::new(100, 2)).await {
            txn.rollback().await?;
            return Err(anyhow::Error::from(e));
        }
        txn.commit().await?;
        Ok::<(), anyhow::Error>(())
    }
    .await;

    assert!(result.is_err());
    assert!(!visit::exists(&db, 12).await?);
    assert_eq!(visit_service::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// Duplicate visit ids are rejected by the store itself
#[tokio::test]
async fn test_duplicate_visit_id_is_unique_violation() -> Result<()> {
    let db = seeded_db().await?;

    visit::insert_header(&db, 13, 5, 3, Utc::now().into()).await?;
    let err = visit::insert_header(&db, 13, 5, 3, Utc::now().into()).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))));
    assert_eq!(visit::Entity::find().count(&db).await?, 1);
    Ok(())
}
