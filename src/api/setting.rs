//! Settings Commands

use super::{ApiClient, ApiResult};
use crate::models::{Settings, SettingsPatch};

impl ApiClient {
    pub async fn get_settings(&self) -> ApiResult<Settings> {
        self.get("/setting").await
    }

    pub async fn update_settings(&self, patch: &SettingsPatch) -> ApiResult<()> {
        self.put("/setting", patch).await
    }
}
