use std::marker::PhantomData;

use attendance_core::clock::Clock;
use attendance_domain::pagination::PageRequest;
use uuid::Uuid;

use crate::domain::repository::ResourceRepository;
use crate::domain::resources::Resource;
use crate::error::ApiError;

/// Create / get / list for one resource, over any repository for it.
pub struct ResourceUseCase<R, Repo, C>
where
    R: Resource,
    Repo: ResourceRepository<R>,
    C: Clock,
{
    pub repo: Repo,
    pub clock: C,
    resource: PhantomData<fn() -> R>,
}

impl<R, Repo, C> ResourceUseCase<R, Repo, C>
where
    R: Resource,
    Repo: ResourceRepository<R>,
    C: Clock,
{
    pub fn new(repo: Repo, clock: C) -> Self {
        Self {
            repo,
            clock,
            resource: PhantomData,
        }
    }

    pub async fn create(&self, new: R::New) -> Result<Uuid, ApiError> {
        let id = self.repo.create(new, self.clock.now()).await?;
        tracing::debug!(resource = R::NAME, %id, "resource created");
        Ok(id)
    }

    pub async fn get(&self, id: Uuid) -> Result<R::Record, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(R::NAME))
    }

    pub async fn list(&self, page: PageRequest) -> Result<Vec<R::Record>, ApiError> {
        self.repo.list(page.clamped()).await
    }
}
