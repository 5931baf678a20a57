use std::collections::HashMap;
use std::sync::RwLock;

use siconi_auth::Operator;
use siconi_clients::Client;
use siconi_core::ClientId;
use siconi_sales::{Sale, SaleLine};

use super::r#trait::{ClientStore, OperatorStore, SaleStore, StoreError};

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

/// In-memory sale store.
///
/// Intended for tests/dev. Each registration appends a new record, so equal
/// calls persist distinct sales, matching the surrogate-keyed source schema.
#[derive(Debug, Default)]
pub struct InMemorySaleStore {
    sales: RwLock<Vec<(Sale, Vec<SaleLine>)>>,
}

impl InMemorySaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.sales.read().map(|sales| sales.len()).unwrap_or(0)
    }

    pub fn registered(&self) -> Vec<(Sale, Vec<SaleLine>)> {
        self.sales
            .read()
            .map(|sales| sales.clone())
            .unwrap_or_default()
    }
}

impl SaleStore for InMemorySaleStore {
    fn register_sale(&self, sale: &Sale, lines: &[SaleLine]) -> Result<(), StoreError> {
        if lines.is_empty() {
            return Err(StoreError::Constraint(
                "sale must carry at least one line".to_string(),
            ));
        }

        let mut sales = self.sales.write().map_err(|_| poisoned())?;
        sales.push((sale.clone(), lines.to_vec()));
        Ok(())
    }
}

/// In-memory client store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let clients = clients
            .into_iter()
            .map(|client| (client.id_typed(), client))
            .collect();
        Self {
            clients: RwLock::new(clients),
        }
    }
}

impl ClientStore for InMemoryClientStore {
    fn all_clients(&self) -> Result<Vec<Client>, StoreError> {
        let clients = self.clients.read().map_err(|_| poisoned())?;
        let mut roster: Vec<Client> = clients.values().cloned().collect();
        // Deterministic order for scans and listings.
        roster.sort_by_key(Client::id_typed);
        Ok(roster)
    }

    fn insert(&self, client: Client) -> Result<(), StoreError> {
        let mut clients = self.clients.write().map_err(|_| poisoned())?;
        let id = client.id_typed();
        if clients.contains_key(&id) {
            return Err(StoreError::Duplicate(format!("client {id}")));
        }
        clients.insert(id, client);
        Ok(())
    }

    fn update(&self, client: Client) -> Result<(), StoreError> {
        let mut clients = self.clients.write().map_err(|_| poisoned())?;
        let id = client.id_typed();
        if !clients.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        clients.insert(id, client);
        Ok(())
    }

    fn remove(&self, id: ClientId) -> Result<(), StoreError> {
        let mut clients = self.clients.write().map_err(|_| poisoned())?;
        clients.remove(&id).map(drop).ok_or(StoreError::NotFound)
    }

    fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, StoreError> {
        let clients = self.clients.read().map_err(|_| poisoned())?;
        Ok(clients.get(&id).cloned())
    }

    fn find_by_code(&self, code: &str) -> Result<Option<Client>, StoreError> {
        let clients = self.clients.read().map_err(|_| poisoned())?;
        Ok(clients
            .values()
            .find(|client| client.code() == code)
            .cloned())
    }
}

/// In-memory operator store.
///
/// Intended for tests/dev. Passwords are held and matched verbatim, as the
/// source schema does.
#[derive(Debug, Default)]
pub struct InMemoryOperatorStore {
    operators: RwLock<Vec<(Operator, String)>>,
}

impl InMemoryOperatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, operator: Operator, password: impl Into<String>) {
        if let Ok(mut operators) = self.operators.write() {
            operators.push((operator, password.into()));
        }
    }
}

impl OperatorStore for InMemoryOperatorStore {
    fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Operator>, StoreError> {
        let operators = self.operators.read().map_err(|_| poisoned())?;
        Ok(operators
            .iter()
            .find(|(operator, stored)| operator.username() == username && stored == password)
            .map(|(operator, _)| operator.clone()))
    }
}
