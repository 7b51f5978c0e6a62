use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::domain::model::CardRecord;

/// 泰國身分證欄位的標籤 (泰文 / 英文兩種印刷)
const ID_NUMBER_LABELS: [&str; 2] = ["เลขประจำตัวประชาชน", "Identification Number"];
const NAME_LABELS: [&str; 2] = ["ชื่อตัวและชื่อสกุล", "Name"];
const BIRTH_DATE_LABELS: [&str; 2] = ["เกิดวันที่", "Date of Birth"];
const ADDRESS_LABELS: [&str; 1] = ["ที่อยู่"];
const ISSUE_DATE_LABELS: [&str; 2] = ["วันออกบัตร", "Date of issue"];
const EXPIRY_DATE_LABELS: [&str; 2] = ["วันบัตรหมดอายุ", "Date of Expiry"];

/// Card fields a scanned line can contribute to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardField {
    IdNumber,
    Name,
    BirthDate,
    Address,
    IssueDate,
    ExpiryDate,
}

/// Label rules in priority order. The first rule whose label occurs as a
/// substring of the line claims the line, so e.g. a line carrying both the
/// name label and "Date of Birth" is treated as a name line.
const LABEL_RULES: [(CardField, &[&str]); 6] = [
    (CardField::IdNumber, &ID_NUMBER_LABELS),
    (CardField::Name, &NAME_LABELS),
    (CardField::BirthDate, &BIRTH_DATE_LABELS),
    (CardField::Address, &ADDRESS_LABELS),
    (CardField::IssueDate, &ISSUE_DATE_LABELS),
    (CardField::ExpiryDate, &EXPIRY_DATE_LABELS),
];

// ASCII classes: the card prints the ID digits and dates in Arabic numerals
// and Latin month names; Thai numerals must not match.
static ID_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)\d{1} \d{4} \d{5} \d{2} \d{1}").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u)\d{1,2} \w+ \d{4}").unwrap());

/// Parses raw OCR text into a [`CardRecord`].
///
/// Scans the text line by line. Each line is matched against the bilingual
/// label table; a matching line is handed to the extractor for that field.
/// When a label occurs on more than one line, the later line overwrites the
/// earlier result (the address is the one exception and keeps its first
/// match). Input with no recognizable labels yields an empty record.
pub fn extract(text: &str) -> CardRecord {
    let raw_lines: Vec<&str> = text.lines().collect();
    let mut record = CardRecord::default();

    for (index, raw_line) in raw_lines.iter().enumerate() {
        let line = raw_line.trim();
        let Some(field) = match_rule(line) else {
            continue;
        };

        debug!("🔍 line {} matched {:?}", index, field);

        match field {
            CardField::IdNumber => record.id_card_number = extract_id_card_number(line),
            CardField::Name => {
                let (name, last_name) = extract_name(line);
                record.name = name;
                record.last_name = last_name;
            }
            CardField::BirthDate => record.date_of_birth = extract_date(line),
            CardField::Address => {
                if record.address.is_none() {
                    record.address = extract_address(&raw_lines);
                }
            }
            CardField::IssueDate => record.date_of_issue = extract_date(line),
            CardField::ExpiryDate => record.date_of_expiry = extract_date(line),
        }
    }

    record
}

/// First rule whose label is a substring of the line, if any.
fn match_rule(line: &str) -> Option<CardField> {
    for (field, labels) in LABEL_RULES {
        if labels.iter().any(|label| line.contains(label)) {
            return Some(field);
        }
    }
    None
}

/// The 13-digit ID is printed in 1-4-5-2-1 groups; match the grouped form
/// and strip the spaces.
fn extract_id_card_number(line: &str) -> Option<String> {
    ID_NUMBER_RE.find(line).map(|m| m.as_str().replace(' ', ""))
}

/// The name line reads `<thai label> <english label> <title> <first> <last>`,
/// so after splitting on spaces the given name sits at index 3 and the last
/// name at index 4. Shorter lines clear both fields. Known limitation: middle
/// names, double spacing or a shifted title land the wrong tokens in these
/// slots; the fixed indices match the standard card print and stay as-is.
fn extract_name(line: &str) -> (Option<String>, Option<String>) {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() >= 5 {
        (Some(tokens[3].to_string()), Some(tokens[4].to_string()))
    } else {
        (None, None)
    }
}

fn extract_date(line: &str) -> Option<String> {
    DATE_RE.find(line).map(|m| m.as_str().to_string())
}

/// The address spans the label line and the line after it. Re-scans the full
/// line list from the top for the first raw line carrying the address label,
/// then joins it with its successor by a single space. When the label sits on
/// the final line there is no continuation and the label line stands alone.
fn extract_address(raw_lines: &[&str]) -> Option<String> {
    let start = raw_lines
        .iter()
        .position(|line| ADDRESS_LABELS.iter().any(|label| line.contains(label)))?;
    let end = (start + 2).min(raw_lines.len());
    Some(raw_lines[start..end].join(" "))
}
