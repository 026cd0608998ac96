use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait};
use anyhow::Result;

use super::seeded_db;
use crate::{client, errors::ModelError, mechanic, service, visit, visit_service};

#[tokio::test]
async fn test_client_lookup() -> Result<()> {
    let db = seeded_db().await?;

    assert!(client::exists(&db, 5).await?);
    assert!(!client::exists(&db, 6).await?);

    let found = client::Entity::find_by_id(5).one(&db).await?.unwrap();
    assert_eq!(found.first_name, "Ada");
    assert_eq!(found.date_of_birth, NaiveDate::from_ymd_opt(1990, 12, 10).unwrap());
    Ok(())
}

#[tokio::test]
async fn test_client_create_requires_names() -> Result<()> {
    let db = seeded_db().await?;
    let dob = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let err = client::create(&db, 9, " ", "Smith", dob).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert!(!client::exists(&db, 9).await?);
    Ok(())
}

#[tokio::test]
async fn test_mechanic_lookup_by_licence() -> Result<()> {
    let db = seeded_db().await?;

    assert_eq!(mechanic::find_id_by_licence(&db, "M-100").await?, Some(3));
    assert_eq!(mechanic::find_id_by_licence(&db, "M-999").await?, None);

    let err = mechanic::create(&db, 4, "").await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn test_service_lookup_by_name() -> Result<()> {
    let db = seeded_db().await?;

    assert_eq!(service::find_id_by_name(&db, "Tire Rotation").await?, Some(2));
    assert_eq!(service::find_id_by_name(&db, "tire rotation").await?, None);
    assert_eq!(service::Entity::find().count(&db).await?, 3);
    Ok(())
}

#[tokio::test]
async fn test_visit_with_lines_and_relations() -> Result<()> {
    let db = seeded_db().await?;

    assert!(!visit::exists(&db, 1).await?);
    let header = visit::insert_header(&db, 1, 5, 3, Utc::now().into()).await?;
    visit_service::insert_line(&db, 1, 1, Decimal::new(4999, 2)).await?;
    visit_service::insert_line(&db, 1, 2, Decimal::new(1999, 2)).await?;
    assert!(visit::exists(&db, 1).await?);

    let owner = header.find_related(client::Entity).one(&db).await?.unwrap();
    assert_eq!(owner.client_id, 5);
    let by = header.find_related(mechanic::Entity).one(&db).await?.unwrap();
    assert_eq!(by.licence_number, "M-100");

    let lines = header.find_related(visit_service::Entity).all(&db).await?;
    assert_eq!(lines.len(), 2);
    let total: Decimal = lines.iter().map(|l| l.service_fee).sum();
    assert_eq!(total.round_dp(2), Decimal::new(6998, 2));
    Ok(())
}
