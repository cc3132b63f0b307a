use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::people::AccountFields;
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ParentRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub account: AccountFields,
    pub phone: String,
    pub address: String,
}

impl ParentRequest {
    pub fn validate(&self, creating: bool) -> Result<()> {
        self.account.validate(creating)?;
        validate::require_text(&self.phone, "Phone is required!")?;
        validate::require_text(&self.address, "Address is required!")
    }
}
