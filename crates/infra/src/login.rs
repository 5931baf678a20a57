//! Operator login workflow.

use tracing::{error, warn};

use siconi_auth::{Credentials, Operator};

use crate::store::OperatorStore;

/// Mediates between the login form and the operator store.
pub struct LoginService<U> {
    operators: U,
}

impl<U> LoginService<U>
where
    U: OperatorStore,
{
    pub fn new(operators: U) -> Self {
        Self { operators }
    }

    /// Authenticate a login attempt.
    ///
    /// Blank fields never reach the store. A store failure surfaces to the
    /// caller the same way as a bad credential pair: no session.
    pub fn authenticate(&self, credentials: Credentials<'_>) -> Option<Operator> {
        if credentials.has_blank_fields() {
            warn!("login attempt with blank fields");
            return None;
        }

        match self
            .operators
            .find_by_credentials(credentials.username.trim(), credentials.password)
        {
            Ok(found) => found,
            Err(err) => {
                error!(%err, "operator lookup failed");
                None
            }
        }
    }
}
