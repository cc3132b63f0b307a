use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::people::{AccountFields, UserSex};
use crate::utils::validate;

// 创建/更新教师请求，更新时必须带 id
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub account: AccountFields,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub img: Option<String>,
    pub blood_type: String,
    pub sex: UserSex,
    pub birthday: chrono::DateTime<chrono::Utc>,
    /// 所教科目 id
    #[serde(default)]
    pub subjects: Vec<i64>,
}

impl TeacherRequest {
    pub fn validate(&self, creating: bool) -> Result<()> {
        self.account.validate(creating)?;
        validate::require_text(&self.phone, "Phone is required!")?;
        validate::require_text(&self.address, "Address is required!")?;
        validate::validate_blood_type(&self.blood_type)?;
        Ok(())
    }
}
