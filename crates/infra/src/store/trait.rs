use std::sync::Arc;

use thiserror::Error;

use siconi_auth::Operator;
use siconi_clients::Client;
use siconi_core::ClientId;
use siconi_sales::{Sale, SaleLine};

/// Store operation error.
///
/// Infrastructure failures only. Deterministic business failures are
/// `DomainError`s and never reach this enum.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("record not found")]
    NotFound,
}

/// Persistence boundary for registered sales.
///
/// Implementations must commit the header and every line together or not at
/// all: a returned error means nothing was persisted, and no partial sale is
/// ever visible to other readers. Surrogate-key generation under concurrent
/// writers is an implementation concern, not the caller's.
pub trait SaleStore: Send + Sync {
    fn register_sale(&self, sale: &Sale, lines: &[SaleLine]) -> Result<(), StoreError>;
}

/// Persistence boundary for client records.
pub trait ClientStore: Send + Sync {
    /// Full current roster, used for best-effort id resolution.
    fn all_clients(&self) -> Result<Vec<Client>, StoreError>;

    fn insert(&self, client: Client) -> Result<(), StoreError>;

    fn update(&self, client: Client) -> Result<(), StoreError>;

    fn remove(&self, id: ClientId) -> Result<(), StoreError>;

    fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, StoreError>;

    fn find_by_code(&self, code: &str) -> Result<Option<Client>, StoreError>;
}

/// Persistence boundary for operator accounts.
pub trait OperatorStore: Send + Sync {
    /// Resolve an operator by exact credential match.
    ///
    /// The source schema answers this with a single username+password query;
    /// how passwords are stored and compared is the implementation's concern.
    fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Operator>, StoreError>;
}

impl<S> SaleStore for Arc<S>
where
    S: SaleStore + ?Sized,
{
    fn register_sale(&self, sale: &Sale, lines: &[SaleLine]) -> Result<(), StoreError> {
        (**self).register_sale(sale, lines)
    }
}

impl<S> ClientStore for Arc<S>
where
    S: ClientStore + ?Sized,
{
    fn all_clients(&self) -> Result<Vec<Client>, StoreError> {
        (**self).all_clients()
    }

    fn insert(&self, client: Client) -> Result<(), StoreError> {
        (**self).insert(client)
    }

    fn update(&self, client: Client) -> Result<(), StoreError> {
        (**self).update(client)
    }

    fn remove(&self, id: ClientId) -> Result<(), StoreError> {
        (**self).remove(id)
    }

    fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, StoreError> {
        (**self).find_by_id(id)
    }

    fn find_by_code(&self, code: &str) -> Result<Option<Client>, StoreError> {
        (**self).find_by_code(code)
    }
}

impl<S> OperatorStore for Arc<S>
where
    S: OperatorStore + ?Sized,
{
    fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Operator>, StoreError> {
        (**self).find_by_credentials(username, password)
    }
}
