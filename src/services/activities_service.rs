use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::database::ActivityRegistry;
use crate::error::RegistryError;
use crate::models::ActivityListing;

/// Query string carried by the signup and unregister routes.
#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

/// Body returned by a successful signup or unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> ActivityListing {
    registry.list_activities()
}

pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RegistryError> {
    match registry.signup(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(Confirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RegistryError> {
    match registry.unregister(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Ok(Confirmation {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_messages_name_email_and_activity() {
        let registry = ActivityRegistry::seeded();
        let signed = signup(&registry, "Art Club", "zoe@mergington.edu").unwrap();
        assert_eq!(signed.message, "Signed up zoe@mergington.edu for Art Club");

        let removed = unregister(&registry, "Art Club", "zoe@mergington.edu").unwrap();
        assert_eq!(removed.message, "Unregistered zoe@mergington.edu from Art Club");
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let registry = ActivityRegistry::seeded();
        assert_eq!(
            signup(&registry, "Art Club", "noah@mergington.edu"),
            Err(RegistryError::AlreadySignedUp)
        );
        assert_eq!(
            unregister(&registry, "Knitting", "noah@mergington.edu"),
            Err(RegistryError::ActivityNotFound)
        );
    }
}
