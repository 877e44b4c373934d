//! src/domain/contact_email.rs

/// Reply-to address left by the visitor.
///
/// Only checks for an `@` and a `.` somewhere in the value. Anything stricter
/// would start rejecting addresses the form has always accepted.
#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<ContactEmail, String> {
        if s.contains('@') && s.contains('.') {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid contact email.", s))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
