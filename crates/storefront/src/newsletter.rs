//! Newsletter sign-up field.
//!
//! Validation only: the address is checked, a notice is raised and the field
//! is cleared on success. Nothing is sent or stored.

use lumina_core::{Email, EmailError};

use crate::page::Notice;

/// Validate a submitted address and pick the notice to show.
#[must_use]
pub fn subscribe(input: &str) -> Notice {
    match Email::parse(input) {
        Ok(email) => {
            tracing::info!(domain = email.domain(), "Newsletter sign-up");
            Notice::NewsletterSubscribed
        }
        Err(EmailError::Empty) => Notice::NewsletterEmailMissing,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected newsletter address");
            Notice::NewsletterEmailInvalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_notices() {
        assert_eq!(subscribe(""), Notice::NewsletterEmailMissing);
        assert_eq!(subscribe("   "), Notice::NewsletterEmailMissing);
        assert_eq!(subscribe("nope"), Notice::NewsletterEmailInvalid);
        assert_eq!(subscribe("a@b"), Notice::NewsletterEmailInvalid);
        assert_eq!(subscribe(" hej@lumina.dk "), Notice::NewsletterSubscribed);
    }
}
