//! Phone numbers owned by the account, used by call flows.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::Result;
use crate::types::Phone;

api_enum! {
    pub enum NumberCapability {
        VoiceInbound => "VOICE_INBOUND",
        VoiceOutbound => "VOICE_OUTBOUND",
        SmsInbound => "SMS_INBOUND",
        SmsOutbound => "SMS_OUTBOUND",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Number {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Phone>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<NumberCapability>,
}

#[derive(Debug, Clone, Default)]
pub struct GetNumbersInput {}

#[derive(Debug, Clone)]
pub struct GetNumbersOutput {
    pub numbers: Vec<Number>,
}

impl IlertClient {
    /// List the account's phone numbers
    pub async fn get_numbers(&self, _input: &GetNumbersInput) -> Result<GetNumbersOutput> {
        let url = self.url(&[&routes::NUMBERS])?;
        let numbers = self.get_json(url, &Query::new()).await?;
        Ok(GetNumbersOutput { numbers })
    }
}
