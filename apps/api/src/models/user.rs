#![allow(dead_code)]

// Account schema kept as a placeholder: no route, handler or store reads or
// writes it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Auto-assigned, unique.
    pub id: i32,
    /// Unique.
    pub username: String,
    pub password: String,
}

/// Insert shape of `UserAccount`: the store assigns `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUserAccount {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_requires_both_fields() {
        let ok: Result<NewUserAccount, _> =
            serde_json::from_str(r#"{"username":"john","password":"hunter22"}"#);
        assert!(ok.is_ok());

        let missing: Result<NewUserAccount, _> = serde_json::from_str(r#"{"username":"john"}"#);
        assert!(missing.is_err());
    }
}
