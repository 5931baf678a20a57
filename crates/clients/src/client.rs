use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use siconi_core::{ClientId, DomainError, DomainResult, Entity};

/// Contact information for a client.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Customer/account record.
///
/// `id` is the numeric persistence key; `code` is the business-facing
/// identifier printed on receipts. Sale headers reference a client through a
/// raw string field that usually holds the numeric key, so resolution from a
/// sale back to a `Client` is fallible and best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    code: String,
    name: String,
    contact: ContactInfo,
    registered_at: DateTime<Utc>,
}

impl Client {
    /// Validate and build a client record.
    ///
    /// The business code is normalized (trimmed, uppercased) before storage.
    pub fn new(
        id: ClientId,
        code: impl Into<String>,
        name: impl Into<String>,
        contact: Option<ContactInfo>,
        registered_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let code = code.into().trim().to_uppercase();
        if code.is_empty() {
            return Err(DomainError::validation("client code must not be blank"));
        }

        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("client name must not be blank"));
        }

        Ok(Self {
            id,
            code,
            name,
            contact: contact.unwrap_or_default(),
            registered_at,
        })
    }

    pub fn id_typed(&self) -> ClientId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Replace name/contact details, keeping id and code stable.
    pub fn with_details(
        mut self,
        name: Option<String>,
        contact: Option<ContactInfo>,
    ) -> DomainResult<Self> {
        if let Some(name) = name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(DomainError::validation("client name must not be blank"));
            }
            self.name = name;
        }
        if let Some(contact) = contact {
            self.contact = contact;
        }
        Ok(self)
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn new_client_normalizes_business_code() {
        let client =
            Client::new(ClientId::new(7), "  cl-0007 ", "Acme Ltd", None, test_time()).unwrap();
        assert_eq!(client.code(), "CL-0007");
        assert_eq!(client.name(), "Acme Ltd");
    }

    #[test]
    fn code_normalization_is_idempotent() {
        let once =
            Client::new(ClientId::new(1), " cl-1 ", "First", None, test_time()).unwrap();
        let twice =
            Client::new(ClientId::new(1), once.code(), "First", None, test_time()).unwrap();
        assert_eq!(once.code(), twice.code());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Client::new(ClientId::new(2), "CL-2", "   ", None, test_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn blank_code_is_rejected() {
        let err = Client::new(ClientId::new(3), "  ", "Someone", None, test_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn with_details_rejects_blank_replacement_name() {
        let client = Client::new(ClientId::new(4), "CL-4", "Keep", None, test_time()).unwrap();
        let err = client.with_details(Some(" ".to_string()), None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn with_details_updates_contact_and_keeps_code() {
        let client = Client::new(ClientId::new(5), "CL-5", "Keep", None, test_time()).unwrap();
        let contact = ContactInfo {
            email: Some("a@b.example".to_string()),
            phone: None,
            address: None,
        };
        let updated = client.with_details(None, Some(contact.clone())).unwrap();
        assert_eq!(updated.contact(), &contact);
        assert_eq!(updated.code(), "CL-5");
    }
}
