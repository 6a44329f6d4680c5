use serde::{Deserialize, Serialize};

/// A visitor-submitted booking or contact inquiry.
///
/// The contact form sends the first six fields; the booking form additionally
/// carries `time`, `location`, and `package`. Every field defaults to empty on
/// deserialization so an absent field is handled by the required-field check
/// instead of failing at the JSON layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub package: Option<String>,
}

impl InquiryRequest {
    /// Names of required fields that are absent or blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.event_type.trim().is_empty() {
            missing.push("eventType");
        }
        if self.date.trim().is_empty() {
            missing.push("date");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }
}
