use serde::{Deserialize, Serialize};

/// A `User` node. `id` is the identity the store assigned to the node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Properties to overwrite on an existing user. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_with_no_fields_is_empty() {
        assert!(UpdateUser::default().is_empty());
        assert!(!UpdateUser {
            name: Some("New".into()),
            email: None,
        }
        .is_empty());
    }
}
