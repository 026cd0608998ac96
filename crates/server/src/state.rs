use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::visit::{repo::SeaOrmVisitRepository, VisitService};

#[derive(Clone)]
pub struct ServerState {
    pub visits: VisitService<SeaOrmVisitRepository>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { visits: VisitService::new(Arc::new(SeaOrmVisitRepository { db })) }
    }
}
