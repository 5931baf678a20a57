use serde::{Deserialize, Serialize};

use siconi_core::{DomainError, DomainResult, Entity, OperatorId};

use crate::access::Role;

/// Back-office user as returned from a successful login.
///
/// The password never travels on this type; credential matching is owned by
/// the operator store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    id: OperatorId,
    username: String,
    display_name: String,
    role: Role,
}

impl Operator {
    pub fn new(
        id: OperatorId,
        username: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
    ) -> DomainResult<Self> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(DomainError::validation("username must not be blank"));
        }

        let display_name = display_name.into().trim().to_string();
        if display_name.is_empty() {
            return Err(DomainError::validation("display name must not be blank"));
        }

        Ok(Self {
            id,
            username,
            display_name,
            role,
        })
    }

    pub fn id_typed(&self) -> OperatorId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Entity for Operator {
    type Id = OperatorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_username_is_trimmed() {
        let op = Operator::new(OperatorId::new(), " admin ", "Administrator", Role::Admin).unwrap();
        assert_eq!(op.username(), "admin");
    }

    #[test]
    fn blank_username_is_rejected() {
        let err =
            Operator::new(OperatorId::new(), "  ", "Administrator", Role::Admin).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
