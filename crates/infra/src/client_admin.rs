//! Client administration workflow.
//!
//! Same controller shape as checkout: field checks first, then exactly one
//! store call per operation. Failures are logged and reported as a boolean.

use chrono::Utc;
use tracing::{error, warn};

use siconi_clients::{Client, ContactInfo};
use siconi_core::ClientId;

use crate::store::ClientStore;

/// Mediates between the client administration screens and the client store.
pub struct ClientService<C> {
    clients: C,
}

impl<C> ClientService<C>
where
    C: ClientStore,
{
    pub fn new(clients: C) -> Self {
        Self { clients }
    }

    /// Register a new client. Returns whether the record was stored.
    pub fn register(
        &self,
        id: ClientId,
        code: &str,
        name: &str,
        contact: Option<ContactInfo>,
    ) -> bool {
        let client = match Client::new(id, code, name, contact, Utc::now()) {
            Ok(client) => client,
            Err(err) => {
                warn!(client_id = %id, %err, "client rejected");
                return false;
            }
        };

        match self.clients.insert(client) {
            Ok(()) => true,
            Err(err) => {
                error!(client_id = %id, %err, "client registration failed");
                false
            }
        }
    }

    /// Update name and/or contact details of an existing client.
    pub fn update_details(
        &self,
        id: ClientId,
        name: Option<String>,
        contact: Option<ContactInfo>,
    ) -> bool {
        let current = match self.clients.find_by_id(id) {
            Ok(Some(client)) => client,
            Ok(None) => {
                warn!(client_id = %id, "client not found");
                return false;
            }
            Err(err) => {
                error!(client_id = %id, %err, "client lookup failed");
                return false;
            }
        };

        let updated = match current.with_details(name, contact) {
            Ok(client) => client,
            Err(err) => {
                warn!(client_id = %id, %err, "client update rejected");
                return false;
            }
        };

        match self.clients.update(updated) {
            Ok(()) => true,
            Err(err) => {
                error!(client_id = %id, %err, "client update failed");
                false
            }
        }
    }

    /// Remove a client record. Returns whether a record was deleted.
    pub fn remove(&self, id: ClientId) -> bool {
        match self.clients.remove(id) {
            Ok(()) => true,
            Err(err) => {
                warn!(client_id = %id, %err, "client removal failed");
                false
            }
        }
    }

    pub fn find_by_code(&self, code: &str) -> Option<Client> {
        match self.clients.find_by_code(code) {
            Ok(found) => found,
            Err(err) => {
                error!(%err, "client lookup failed");
                None
            }
        }
    }

    pub fn list(&self) -> Vec<Client> {
        match self.clients.all_clients() {
            Ok(roster) => roster,
            Err(err) => {
                error!(%err, "client roster unavailable");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::InMemoryClientStore;

    fn setup() -> (ClientService<Arc<InMemoryClientStore>>, Arc<InMemoryClientStore>) {
        let store = Arc::new(InMemoryClientStore::new());
        (ClientService::new(store.clone()), store)
    }

    #[test]
    fn register_stores_a_valid_client() {
        let (service, store) = setup();

        assert!(service.register(ClientId::new(1), "cl-0001", "Acme Ltd", None));

        let stored = store.find_by_id(ClientId::new(1)).unwrap().unwrap();
        assert_eq!(stored.code(), "CL-0001");
    }

    #[test]
    fn register_rejects_blank_fields_before_the_store() {
        let (service, store) = setup();

        assert!(!service.register(ClientId::new(1), "  ", "Acme Ltd", None));
        assert!(!service.register(ClientId::new(1), "CL-0001", " ", None));
        assert!(store.all_clients().unwrap().is_empty());
    }

    #[test]
    fn register_reports_false_on_duplicate_ids() {
        let (service, _store) = setup();

        assert!(service.register(ClientId::new(1), "CL-0001", "First", None));
        assert!(!service.register(ClientId::new(1), "CL-0002", "Second", None));
    }

    #[test]
    fn update_details_replaces_the_name() {
        let (service, store) = setup();
        service.register(ClientId::new(1), "CL-0001", "Old Name", None);

        assert!(service.update_details(ClientId::new(1), Some("New Name".to_string()), None));

        let stored = store.find_by_id(ClientId::new(1)).unwrap().unwrap();
        assert_eq!(stored.name(), "New Name");
    }

    #[test]
    fn update_of_a_missing_client_reports_false() {
        let (service, _store) = setup();
        assert!(!service.update_details(ClientId::new(9), Some("Name".to_string()), None));
    }

    #[test]
    fn remove_reports_whether_a_record_existed() {
        let (service, _store) = setup();
        service.register(ClientId::new(1), "CL-0001", "Acme Ltd", None);

        assert!(service.remove(ClientId::new(1)));
        assert!(!service.remove(ClientId::new(1)));
    }

    #[test]
    fn find_by_code_uses_the_normalized_code() {
        let (service, _store) = setup();
        service.register(ClientId::new(1), "cl-0001", "Acme Ltd", None);

        assert!(service.find_by_code("CL-0001").is_some());
        assert!(service.find_by_code("cl-0001").is_none());
    }
}
