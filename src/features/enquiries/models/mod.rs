mod contact_enquiry;
mod product_enquiry;

pub use contact_enquiry::ContactEnquiry;
pub use product_enquiry::ProductEnquiry;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Processing state of an enquiry; the only field editable after submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    #[default]
    Pending,
    Contacted,
    Resolved,
}

impl EnquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "pending",
            EnquiryStatus::Contacted => "contacted",
            EnquiryStatus::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown enquiry status '{0}'")]
pub struct UnknownEnquiryStatus(String);

impl TryFrom<String> for EnquiryStatus {
    type Error = UnknownEnquiryStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(EnquiryStatus::Pending),
            "contacted" => Ok(EnquiryStatus::Contacted),
            "resolved" => Ok(EnquiryStatus::Resolved),
            _ => Err(UnknownEnquiryStatus(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text_column() {
        for status in [
            EnquiryStatus::Pending,
            EnquiryStatus::Contacted,
            EnquiryStatus::Resolved,
        ] {
            assert_eq!(
                EnquiryStatus::try_from(status.as_str().to_string()).unwrap(),
                status
            );
        }
        assert!(EnquiryStatus::try_from("closed".to_string()).is_err());
    }
}
