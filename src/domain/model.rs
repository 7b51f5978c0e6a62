use serde::{Deserialize, Serialize};

/// Structured result of parsing the OCR text of a Thai national ID card.
///
/// Every field is optional: `None` means the corresponding label was not
/// found in the input. Serializes to the flat camelCase object the endpoint
/// returns (`idCardNumber`, `name`, `lastName`, ...), with absent fields
/// rendered as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id_card_number: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub date_of_issue: Option<String>,
    pub date_of_expiry: Option<String>,
}

impl CardRecord {
    /// Number of fields that were actually found, for log summaries.
    pub fn populated_fields(&self) -> usize {
        [
            self.id_card_number.is_some(),
            self.name.is_some(),
            self.last_name.is_some(),
            self.date_of_birth.is_some(),
            self.address.is_some(),
            self.date_of_issue.is_some(),
            self.date_of_expiry.is_some(),
        ]
        .iter()
        .filter(|found| **found)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated_fields() == 0
    }
}
