use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::models::people::{AccountFields, UserSex};
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentRequest {
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
    pub grade_id: i64,
    pub class_id: i64,
    pub parent_id: String,
}

impl StudentRequest {
    pub fn validate(&self, creating: bool) -> Result<()> {
        self.account.validate(creating)?;
        validate::require_text(&self.phone, "Phone is required!")?;
        validate::require_text(&self.address, "Address is required!")?;
        validate::validate_blood_type(&self.blood_type)?;
        validate::require_text(&self.parent_id, "Parent Id is required!")?;
        if self.grade_id <= 0 {
            return Err(SchoolAdminError::validation("Grade is required!"));
        }
        if self.class_id <= 0 {
            return Err(SchoolAdminError::validation("Class is required!"));
        }
        Ok(())
    }
}
