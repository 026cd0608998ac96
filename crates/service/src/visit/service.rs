use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{NewVisit, VisitDetails};
use super::repository::VisitRepository;
use crate::errors::ServiceError;

/// Visit business service independent of web framework
pub struct VisitService<R: VisitRepository> {
    repo: Arc<R>,
}

impl<R: VisitRepository> Clone for VisitService<R> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone() } }
}

impl<R: VisitRepository> VisitService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Fetch one visit with its client, mechanic and performed services.
    ///
    /// # Examples
    /// ```
    /// use service::visit::{VisitService, repository::mock::MockVisitRepository};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = VisitService::new(Arc::new(MockVisitRepository::default()));
    /// let err = tokio_test::block_on(svc.get_visit(42)).unwrap_err();
    /// assert!(matches!(err, ServiceError::NotFound(_)));
    /// ```
    #[instrument(skip(self))]
    pub async fn get_visit(&self, visit_id: i32) -> Result<VisitDetails, ServiceError> {
        let visit = self
            .repo
            .get_visit(visit_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Visit with ID {} not found.", visit_id)))?;
        info!(visit_id, services = visit.visit_services.len(), "visit_fetched");
        Ok(visit)
    }

    /// Create a visit and its service lines. A request without services is
    /// rejected before any storage access.
    #[instrument(skip(self, new_visit), fields(visit_id = new_visit.visit_id, client_id = new_visit.client_id))]
    pub async fn create_visit(&self, new_visit: NewVisit) -> Result<(), ServiceError> {
        if new_visit.services.is_empty() {
            return Err(ServiceError::Validation("At least one service is required.".into()));
        }
        debug!(services = new_visit.services.len(), "creating visit");
        self.repo.create_visit(&new_visit).await?;
        info!(visit_id = new_visit.visit_id, services = new_visit.services.len(), "visit_created");
        Ok(())
    }
}
