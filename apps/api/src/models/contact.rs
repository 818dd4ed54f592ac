use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`. Lives only for the request that carried it.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub message: &'static str,
}
