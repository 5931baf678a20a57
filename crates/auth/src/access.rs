use serde::{Deserialize, Serialize};

/// Back-office role.
///
/// The application runs with a closed two-role model: administrators manage
/// everything, cashiers only work the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
}

/// Capability gate checked by the view layer before opening a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    RegisterSales,
    ManageClients,
    ManageOperators,
}

impl Role {
    pub fn permits(self, permission: Permission) -> bool {
        match self {
            Role::Admin => true,
            Role::Cashier => matches!(permission, Permission::RegisterSales),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_permits_everything() {
        assert!(Role::Admin.permits(Permission::RegisterSales));
        assert!(Role::Admin.permits(Permission::ManageClients));
        assert!(Role::Admin.permits(Permission::ManageOperators));
    }

    #[test]
    fn cashier_is_limited_to_the_register() {
        assert!(Role::Cashier.permits(Permission::RegisterSales));
        assert!(!Role::Cashier.permits(Permission::ManageClients));
        assert!(!Role::Cashier.permits(Permission::ManageOperators));
    }
}
