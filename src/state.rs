use std::sync::Arc;

use crate::application::services::{OwnerService, PetService, VisitService};
use crate::config::ServiceKind;
use crate::domain::repositories::{OwnerRepository, PetRepository, VisitRepository};

/// Shared handler state: the three orchestrators over one entity store.
#[derive(Clone)]
pub struct AppState {
    pub owner_service: Arc<OwnerService<dyn OwnerRepository>>,
    pub pet_service: Arc<PetService<dyn OwnerRepository, dyn PetRepository>>,
    pub visit_service: Arc<VisitService<dyn VisitRepository>>,
    pub services: Arc<[ServiceKind]>,
}

impl AppState {
    /// Wires the services to the given stores, serving every service kind.
    pub fn new(
        owners: Arc<dyn OwnerRepository>,
        pets: Arc<dyn PetRepository>,
        visits: Arc<dyn VisitRepository>,
    ) -> Self {
        Self {
            owner_service: Arc::new(OwnerService::new(owners.clone())),
            pet_service: Arc::new(PetService::new(owners, pets)),
            visit_service: Arc::new(VisitService::new(visits)),
            services: Arc::from(ServiceKind::ALL),
        }
    }

    /// Restricts the service kinds reported by the health endpoint.
    pub fn with_services(mut self, services: &[ServiceKind]) -> Self {
        self.services = Arc::from(services);
        self
    }
}
