use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::PortfolioItem;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioItemCommand, CreatePortfolioItemError, CreatePortfolioItemUseCase,
    DeletePortfolioItemError, DeletePortfolioItemUseCase, GetPortfolioItemError,
    GetPortfolioItemUseCase, GetPortfolioItemsError, GetPortfolioItemsUseCase,
    UpdatePortfolioItemCommand, UpdatePortfolioItemError, UpdatePortfolioItemUseCase,
};

// ============================================================
// Get list
// ============================================================

#[derive(Clone)]
pub struct StubGetPortfolioItemsUseCase {
    result: Result<Vec<PortfolioItem>, GetPortfolioItemsError>,
}

impl StubGetPortfolioItemsUseCase {
    pub fn success(items: Vec<PortfolioItem>) -> Self {
        Self { result: Ok(items) }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(GetPortfolioItemsError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetPortfolioItemsUseCase for StubGetPortfolioItemsUseCase {
    async fn execute(&self) -> Result<Vec<PortfolioItem>, GetPortfolioItemsError> {
        self.result.clone()
    }
}

// ============================================================
// Get single
// ============================================================

#[derive(Clone)]
pub struct StubGetPortfolioItemUseCase {
    result: Result<PortfolioItem, GetPortfolioItemError>,
}

impl StubGetPortfolioItemUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetPortfolioItemError::NotFound),
        }
    }

    pub fn success(item: PortfolioItem) -> Self {
        Self { result: Ok(item) }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(GetPortfolioItemError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetPortfolioItemUseCase for StubGetPortfolioItemUseCase {
    async fn execute(&self, _item_id: Uuid) -> Result<PortfolioItem, GetPortfolioItemError> {
        self.result.clone()
    }
}

// ============================================================
// Create
// ============================================================

#[derive(Default, Clone)]
pub struct DefaultStubCreatePortfolioItemUseCase;

#[async_trait]
impl CreatePortfolioItemUseCase for DefaultStubCreatePortfolioItemUseCase {
    async fn execute(
        &self,
        _command: CreatePortfolioItemCommand,
    ) -> Result<PortfolioItem, CreatePortfolioItemError> {
        unimplemented!("Not used in this test")
    }
}

/// Returns a fixed result and remembers the last command it saw.
#[derive(Clone)]
pub struct RecordingCreatePortfolioItemUseCase {
    result: Result<PortfolioItem, CreatePortfolioItemError>,
    last: Arc<Mutex<Option<CreatePortfolioItemCommand>>>,
}

impl RecordingCreatePortfolioItemUseCase {
    pub fn success(item: PortfolioItem) -> Self {
        Self {
            result: Ok(item),
            last: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_command(&self) -> Option<CreatePortfolioItemCommand> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl CreatePortfolioItemUseCase for RecordingCreatePortfolioItemUseCase {
    async fn execute(
        &self,
        command: CreatePortfolioItemCommand,
    ) -> Result<PortfolioItem, CreatePortfolioItemError> {
        *self.last.lock().unwrap() = Some(command);
        self.result.clone()
    }
}

// ============================================================
// Update
// ============================================================

#[derive(Default, Clone)]
pub struct DefaultStubUpdatePortfolioItemUseCase;

#[async_trait]
impl UpdatePortfolioItemUseCase for DefaultStubUpdatePortfolioItemUseCase {
    async fn execute(
        &self,
        _item_id: Uuid,
        _command: UpdatePortfolioItemCommand,
    ) -> Result<PortfolioItem, UpdatePortfolioItemError> {
        Err(UpdatePortfolioItemError::NotFound)
    }
}

#[derive(Clone)]
pub struct RecordingUpdatePortfolioItemUseCase {
    result: Result<PortfolioItem, UpdatePortfolioItemError>,
    last: Arc<Mutex<Option<UpdatePortfolioItemCommand>>>,
}

impl RecordingUpdatePortfolioItemUseCase {
    pub fn success(item: PortfolioItem) -> Self {
        Self {
            result: Ok(item),
            last: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_command(&self) -> Option<UpdatePortfolioItemCommand> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpdatePortfolioItemUseCase for RecordingUpdatePortfolioItemUseCase {
    async fn execute(
        &self,
        _item_id: Uuid,
        command: UpdatePortfolioItemCommand,
    ) -> Result<PortfolioItem, UpdatePortfolioItemError> {
        *self.last.lock().unwrap() = Some(command);
        self.result.clone()
    }
}

// ============================================================
// Delete
// ============================================================

#[derive(Clone)]
pub struct StubDeletePortfolioItemUseCase {
    result: Result<PortfolioItem, DeletePortfolioItemError>,
}

impl StubDeletePortfolioItemUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(DeletePortfolioItemError::NotFound),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(DeletePortfolioItemError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl DeletePortfolioItemUseCase for StubDeletePortfolioItemUseCase {
    async fn execute(&self, _item_id: Uuid) -> Result<PortfolioItem, DeletePortfolioItemError> {
        self.result.clone()
    }
}
