use async_trait::async_trait;
use common::pagination::{Page, Pagination};

use super::domain::{Cargo, CargoDraft};
use super::filter::CargoPredicate;
use crate::errors::ServiceError;

/// Repository abstraction for cargo persistence.
#[async_trait]
pub trait CargoRepository: Send + Sync {
    /// Insert when `draft.id` is `None`; otherwise replace the row with that
    /// id, failing with `NotFound` if it does not exist.
    async fn save(&self, draft: CargoDraft) -> Result<Cargo, ServiceError>;
    /// Fetch a cargo together with its vehicle in one retrieval.
    async fn find_by_id_with_vehicle(&self, id: i32) -> Result<Option<Cargo>, ServiceError>;
    async fn exists(&self, id: i32) -> Result<bool, ServiceError>;
    /// Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
    /// One page of matches ordered by id; `page` is expected to be normalized.
    /// Fails with `Validation` when the page offset is out of range.
    async fn find_page(&self, predicate: &CargoPredicate, page: Pagination) -> Result<Page<Cargo>, ServiceError>;
    /// Every match ordered by id.
    async fn find_all(&self, predicate: &CargoPredicate) -> Result<Vec<Cargo>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use common::pagination::total_pages;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCargoRepository {
        rows: Mutex<BTreeMap<i32, Cargo>>, // key: cargo id, natural id order
        last_id: Mutex<i32>,
    }

    impl MockCargoRepository {
        pub fn len(&self) -> usize { self.rows.lock().unwrap().len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl CargoRepository for MockCargoRepository {
        async fn save(&self, draft: CargoDraft) -> Result<Cargo, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let id = match draft.id {
                Some(id) if rows.contains_key(&id) => id,
                Some(id) => return Err(ServiceError::not_found("cargo", format!("id {}", id))),
                None => {
                    let mut last = self.last_id.lock().unwrap();
                    *last += 1;
                    *last
                }
            };
            let cargo = Cargo {
                id,
                description: draft.description,
                weight: draft.weight,
                status: draft.status,
                vehicle: draft.vehicle,
            };
            rows.insert(id, cargo.clone());
            Ok(cargo)
        }

        async fn find_by_id_with_vehicle(&self, id: i32) -> Result<Option<Cargo>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().contains_key(&id))
        }

        async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn find_page(&self, predicate: &CargoPredicate, page: Pagination) -> Result<Page<Cargo>, ServiceError> {
            let per_page = page.size.max(1);
            let skip = Pagination::new(page.page, per_page)
                .offset()
                .ok_or_else(|| ServiceError::Validation(format!("page {} is out of range", page.page)))?;
            let matching = self.find_all(predicate).await?;
            let total_items = matching.len() as u64;
            let items = matching
                .into_iter()
                .skip(usize::try_from(skip).unwrap_or(usize::MAX))
                .take(per_page as usize)
                .collect();
            Ok(Page { items, page_index: page.page, total_pages: total_pages(total_items, per_page), total_items })
        }

        async fn find_all(&self, predicate: &CargoPredicate) -> Result<Vec<Cargo>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().filter(|c| predicate.matches(c)).cloned().collect())
        }
    }
}
