use async_trait::async_trait;

use super::domain::{NewVisit, VisitDetails};
use crate::errors::ServiceError;

/// Data-access capability behind the visit endpoints.
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Visit with client, mechanic and performed services; `None` if no row matches.
    async fn get_visit(&self, visit_id: i32) -> Result<Option<VisitDetails>, ServiceError>;

    /// Validate references and write the visit with its service lines,
    /// all or nothing.
    async fn create_visit(&self, new_visit: &NewVisit) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};

    use chrono::Utc;

    use crate::visit::domain::{ClientInfo, MechanicInfo, PerformedService};

    #[derive(Default)]
    struct Store {
        clients: HashMap<i32, ClientInfo>,
        mechanics: HashMap<String, MechanicInfo>, // key: licence number
        services: HashMap<String, i32>,           // key: name
        visits: HashMap<i32, VisitDetails>,
    }

    /// Mirrors the validation order and all-or-nothing behaviour of the
    /// database implementation. Counts every call it receives.
    #[derive(Default)]
    pub struct MockVisitRepository {
        store: Mutex<Store>,
        calls: AtomicUsize,
    }

    impl MockVisitRepository {
        pub fn with_client(self, client: ClientInfo) -> Self {
            self.lock().clients.insert(client.client_id, client);
            self
        }

        pub fn with_mechanic(self, mechanic: MechanicInfo) -> Self {
            self.lock().mechanics.insert(mechanic.licence_number.clone(), mechanic);
            self
        }

        pub fn with_service(self, service_id: i32, name: &str) -> Self {
            self.lock().services.insert(name.to_string(), service_id);
            self
        }

        /// Number of repository calls made so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn visit_count(&self) -> usize {
            self.lock().visits.len()
        }

        fn lock(&self) -> MutexGuard<'_, Store> {
            self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    #[async_trait]
    impl VisitRepository for MockVisitRepository {
        async fn get_visit(&self, visit_id: i32) -> Result<Option<VisitDetails>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.lock().visits.get(&visit_id).cloned())
        }

        async fn create_visit(&self, new_visit: &NewVisit) -> Result<(), ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut store = self.lock();
            if store.visits.contains_key(&new_visit.visit_id) {
                return Err(ServiceError::conflict(format!("Visit with ID {} already exists.", new_visit.visit_id)));
            }
            let client = store
                .clients
                .get(&new_visit.client_id)
                .cloned()
                .ok_or_else(|| ServiceError::not_found(format!("Client with ID {} not found.", new_visit.client_id)))?;
            let mechanic = store
                .mechanics
                .get(&new_visit.mechanic_licence_number)
                .cloned()
                .ok_or_else(|| {
                    ServiceError::not_found(format!(
                        "Mechanic with licence number '{}' not found.",
                        new_visit.mechanic_licence_number
                    ))
                })?;

            let mut lines = Vec::with_capacity(new_visit.services.len());
            for requested in &new_visit.services {
                if !store.services.contains_key(&requested.service_name) {
                    return Err(ServiceError::not_found(format!("Service '{}' not found.", requested.service_name)));
                }
                lines.push(PerformedService { name: requested.service_name.clone(), service_fee: requested.service_fee });
            }

            let visit = VisitDetails {
                visit_id: new_visit.visit_id,
                date: Utc::now().into(),
                client,
                mechanic,
                visit_services: lines,
            };
            store.visits.insert(new_visit.visit_id, visit);
            Ok(())
        }
    }
}
