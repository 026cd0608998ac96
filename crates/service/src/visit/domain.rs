use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A visit as returned by the query path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDetails {
    pub visit_id: i32,
    pub date: DateTime<FixedOffset>,
    pub client: ClientInfo,
    pub mechanic: MechanicInfo,
    pub visit_services: Vec<PerformedService>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MechanicInfo {
    pub mechanic_id: i32,
    pub licence_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformedService {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub service_fee: Decimal,
}

/// Input of the creation path. The visit date is not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVisit {
    pub visit_id: i32,
    pub client_id: i32,
    pub mechanic_licence_number: String,
    #[serde(default)]
    pub services: Vec<RequestedService>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedService {
    pub service_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub service_fee: Decimal,
}
