/// Login form input, borrowed from the view layer.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }

    /// Field-presence check performed before any store lookup.
    ///
    /// Passwords are compared verbatim downstream, so only the username is
    /// trimmed here.
    pub fn has_blank_fields(&self) -> bool {
        self.username.trim().is_empty() || self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_username_or_password_is_detected() {
        assert!(Credentials::new("", "secret").has_blank_fields());
        assert!(Credentials::new("   ", "secret").has_blank_fields());
        assert!(Credentials::new("admin", "").has_blank_fields());
        assert!(!Credentials::new("admin", "secret").has_blank_fields());
    }

    #[test]
    fn whitespace_password_counts_as_present() {
        // Passwords are matched verbatim; a space is a legal character.
        assert!(!Credentials::new("admin", " ").has_blank_fields());
    }
}
