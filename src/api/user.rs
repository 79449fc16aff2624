//! User Commands
//!
//! Login, registration, profile and logout.

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::{Sex, User};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    /// Email or login name
    pub log_data: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub company: &'a str,
    pub phone: &'a str,
    pub sex: Sex,
}

#[derive(Serialize)]
pub struct ProfileUpdate<'a> {
    pub username: &'a str,
    pub company: &'a str,
    pub phone: &'a str,
    pub sex: Sex,
    #[serde(rename = "newPassword", skip_serializing_if = "Option::is_none")]
    pub new_password: Option<&'a str>,
}

// ========================
// Commands
// ========================

impl ApiClient {
    pub async fn login(&self, args: &LoginArgs<'_>) -> ApiResult<()> {
        self.post::<_, serde::de::IgnoredAny>("/user/login", args)
            .await
            .map(|_| ())
    }

    pub async fn register(&self, args: &RegisterArgs<'_>) -> ApiResult<()> {
        self.post::<_, serde::de::IgnoredAny>("/user", args)
            .await
            .map(|_| ())
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.post_empty("/user/logout").await
    }

    pub async fn current_user(&self) -> ApiResult<User> {
        self.get("/user").await
    }

    pub async fn update_profile(&self, args: &ProfileUpdate<'_>) -> ApiResult<()> {
        self.put("/user", args).await
    }

    pub async fn delete_account(&self) -> ApiResult<()> {
        self.delete("/user").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_update_skips_empty_password() {
        let args = ProfileUpdate {
            username: "ana",
            company: "ACME",
            phone: "555",
            sex: Sex::Female,
            new_password: None,
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "username": "ana", "company": "ACME", "phone": "555", "sex": "female" })
        );

        let args = ProfileUpdate { new_password: Some("s3cret!"), ..args };
        assert_eq!(serde_json::to_value(&args).unwrap()["newPassword"], "s3cret!");
    }
}
