use std::sync::Arc;

use tracing::{debug, info, instrument};

use common::pagination::{Pagination, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};
use configs::PaginationConfig;

use super::domain::{CargoDraft, CargoListResponse, CargoRequest, CargoResponse, CargoSearchRequest, CargoSearchResponse};
use super::filter::CargoFilterBuilder;
use super::repository::CargoRepository;
use crate::errors::ServiceError;
use crate::vehicle::VehicleLookup;

/// Cargo CRUD and search, keeping every stored cargo attached to a vehicle
/// resolved through `VehicleLookup`.
pub struct CargoService<R: CargoRepository, V: VehicleLookup> {
    repo: Arc<R>,
    vehicles: Arc<V>,
    filters: CargoFilterBuilder,
    default_page_size: u64,
    max_page_size: u64,
}

impl<R: CargoRepository, V: VehicleLookup> CargoService<R, V> {
    pub fn new(repo: Arc<R>, vehicles: Arc<V>) -> Self {
        Self {
            repo,
            vehicles,
            filters: CargoFilterBuilder,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }

    pub fn with_pagination(mut self, cfg: &PaginationConfig) -> Self {
        self.max_page_size = cfg.max_page_size.max(1);
        self.default_page_size = cfg.default_page_size.clamp(1, self.max_page_size);
        self
    }

    /// Create a cargo attached to the vehicle named by `request.vehicle_number`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::cargo::CargoService;
    /// use service::cargo::domain::{CargoRequest, CargoStatus};
    /// use service::cargo::repository::mock::MockCargoRepository;
    /// use service::vehicle::lookup::mock::MockVehicleLookup;
    ///
    /// let vehicles = Arc::new(MockVehicleLookup::default());
    /// vehicles.insert("AA1234BB", "Volvo FH16");
    /// let svc = CargoService::new(Arc::new(MockCargoRepository::default()), vehicles);
    /// let req = CargoRequest {
    ///     description: "Ceramic tiles".into(),
    ///     weight: 820.0,
    ///     status: CargoStatus::Pending,
    ///     vehicle_number: "AA1234BB".into(),
    /// };
    /// let created = tokio_test::block_on(svc.create(req)).unwrap();
    /// assert_eq!(created.vehicle.number, "AA1234BB");
    /// ```
    #[instrument(skip(self, request), fields(vehicle_number = %request.vehicle_number))]
    pub async fn create(&self, request: CargoRequest) -> Result<CargoResponse, ServiceError> {
        let vehicle = self.vehicles.resolve(&request.vehicle_number).await?;
        let saved = self.repo.save(CargoDraft::from_request(&request, vehicle)).await?;
        info!(cargo_id = saved.id, vehicle_id = saved.vehicle.id, "cargo_created");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<CargoResponse, ServiceError> {
        let cargo = self
            .repo
            .find_by_id_with_vehicle(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("cargo", format!("id {}", id)))?;
        Ok(cargo.into())
    }

    /// Replace every field of cargo `id` and re-resolve its vehicle.
    /// Fails with `NotFound` when `id` does not exist; nothing is created.
    #[instrument(skip(self, request), fields(vehicle_number = %request.vehicle_number))]
    pub async fn update(&self, id: i32, request: CargoRequest) -> Result<CargoResponse, ServiceError> {
        let vehicle = self.vehicles.resolve(&request.vehicle_number).await?;
        let draft = CargoDraft::from_request(&request, vehicle).with_id(id);
        let saved = self.repo.save(draft).await?;
        info!(cargo_id = saved.id, vehicle_id = saved.vehicle.id, "cargo_updated");
        Ok(saved.into())
    }

    /// Remove cargo `id`; a missing id is not an error.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(cargo_id = id, "cargo_deleted");
        Ok(())
    }

    /// One page of matching cargo. `pagination.page` is 0-based; the
    /// response's `current_page` is 1-based. A zero size means the
    /// configured default. A page whose offset does not fit the store's
    /// range fails with `Validation`.
    #[instrument(skip(self, search))]
    pub async fn get_paginated_filtered_list(
        &self,
        pagination: Pagination,
        search: &CargoSearchRequest,
    ) -> Result<CargoListResponse, ServiceError> {
        let predicate = self.filters.build(search);
        let pagination = match pagination.size {
            0 => Pagination::new(pagination.page, self.default_page_size),
            _ => pagination,
        };
        let (page, size) = pagination.normalize(self.max_page_size);
        let pagination = Pagination::new(page, size);
        if pagination.offset().is_none() {
            return Err(ServiceError::Validation(format!("page {} is out of range for size {}", page, size)));
        }
        let page = self.repo.find_page(&predicate, pagination).await?;
        debug!(criteria = predicate.criteria().len(), returned = page.items.len(), total = page.total_items, "cargo_page");
        Ok(CargoListResponse {
            current_page: page.page_index.saturating_add(1),
            total_pages: page.total_pages,
            items: page.items.into_iter().map(CargoSearchResponse::from).collect(),
        })
    }

    /// Every matching cargo, unpaginated.
    #[instrument(skip(self, search))]
    pub async fn get_filtered_list(&self, search: &CargoSearchRequest) -> Result<Vec<CargoResponse>, ServiceError> {
        let predicate = self.filters.build(search);
        let rows = self.repo.find_all(&predicate).await?;
        debug!(criteria = predicate.criteria().len(), returned = rows.len(), "cargo_list");
        Ok(rows.into_iter().map(CargoResponse::from).collect())
    }
}
