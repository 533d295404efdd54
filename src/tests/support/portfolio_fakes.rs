use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::PortfolioItem;
use crate::modules::portfolio::application::ports::outgoing::{
    MediaStore, MediaStoreError, NewPortfolioItemData, PortfolioRepository,
    PortfolioRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Media store
// ──────────────────────────────────────────────────────────
//

/// Records every call. Upload N returns `https://media.test/{folder}/img-N`.
#[derive(Clone, Default)]
pub struct FakeMediaStore {
    upload_attempts: Arc<Mutex<usize>>,
    uploaded: Arc<Mutex<Vec<String>>>,
    delete_attempts: Arc<Mutex<Vec<String>>>,
    deleted: Arc<Mutex<Vec<String>>>,
    fail_upload_at: Option<usize>,
    fail_deletes: bool,
}

impl FakeMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The upload with this zero-based attempt number fails.
    pub fn failing_upload_at(mut self, attempt: usize) -> Self {
        self.fail_upload_at = Some(attempt);
        self
    }

    pub fn failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn upload_calls(&self) -> usize {
        *self.upload_attempts.lock().unwrap()
    }

    pub fn uploaded_urls(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_attempts.lock().unwrap().len()
    }

    /// `folder/identifier` keys that were deleted successfully, sorted.
    pub fn deleted(&self) -> Vec<String> {
        let mut deleted = self.deleted.lock().unwrap().clone();
        deleted.sort();
        deleted
    }
}

#[async_trait]
impl MediaStore for FakeMediaStore {
    async fn upload(
        &self,
        _bytes: Vec<u8>,
        _content_type: &str,
        folder: &str,
    ) -> Result<String, MediaStoreError> {
        let attempt = {
            let mut attempts = self.upload_attempts.lock().unwrap();
            let current = *attempts;
            *attempts += 1;
            current
        };

        if self.fail_upload_at == Some(attempt) {
            return Err(MediaStoreError::UploadFailed("storage unavailable".into()));
        }

        let url = format!("https://media.test/{}/img-{}", folder, attempt);
        self.uploaded.lock().unwrap().push(url.clone());
        Ok(url)
    }

    async fn delete(&self, folder: &str, identifier: &str) -> Result<(), MediaStoreError> {
        let key = format!("{}/{}", folder, identifier);
        self.delete_attempts.lock().unwrap().push(key.clone());

        if self.fail_deletes {
            return Err(MediaStoreError::DeleteFailed("storage unavailable".into()));
        }

        self.deleted.lock().unwrap().push(key);
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Repository
// ──────────────────────────────────────────────────────────
//

/// In-memory repository that records the name of every call.
#[derive(Clone, Default)]
pub struct FakePortfolioRepository {
    items: Arc<Mutex<Vec<PortfolioItem>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    write_error: Option<PortfolioRepositoryError>,
}

impl FakePortfolioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<PortfolioItem>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            ..Self::default()
        }
    }

    /// `create`, `update` and `delete` fail with `err`.
    pub fn failing_writes(mut self, err: PortfolioRepositoryError) -> Self {
        self.write_error = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn items(&self) -> Vec<PortfolioItem> {
        self.items.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_write(&self) -> Result<(), PortfolioRepositoryError> {
        match &self.write_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PortfolioRepository for FakePortfolioRepository {
    async fn find_all(&self) -> Result<Vec<PortfolioItem>, PortfolioRepositoryError> {
        self.record("find_all");
        let mut items = self.items();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<PortfolioItem, PortfolioRepositoryError> {
        self.record("find_by_id");
        self.items()
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(PortfolioRepositoryError::NotFound)
    }

    async fn create(
        &self,
        data: NewPortfolioItemData,
    ) -> Result<PortfolioItem, PortfolioRepositoryError> {
        self.record("create");
        self.check_write()?;

        let now = Utc::now();
        let item = PortfolioItem {
            id: Uuid::new_v4(),
            title: data.title,
            subtitle: data.subtitle,
            description: data.description,
            category: data.category,
            images: data.images,
            created_at: now,
            updated_at: now,
        };
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update(&self, item: PortfolioItem) -> Result<PortfolioItem, PortfolioRepositoryError> {
        self.record("update");
        self.check_write()?;

        let mut items = self.items.lock().unwrap();
        let slot = items
            .iter_mut()
            .find(|stored| stored.id == item.id)
            .ok_or(PortfolioRepositoryError::NotFound)?;

        let saved = PortfolioItem {
            created_at: slot.created_at,
            updated_at: slot.updated_at.max(Utc::now()) + Duration::milliseconds(1),
            ..item
        };
        *slot = saved.clone();
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<PortfolioItem, PortfolioRepositoryError> {
        self.record("delete");
        self.check_write()?;

        let mut items = self.items.lock().unwrap();
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(PortfolioRepositoryError::NotFound)?;
        Ok(items.remove(index))
    }
}
