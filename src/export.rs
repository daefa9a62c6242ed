//! CSV export of the organisational columns
//!
//! Every value is double-quoted with embedded quotes doubled. The parser
//! accepts the same dialect (quoted or bare fields, `\n` or `\r\n` rows,
//! line breaks inside quoted fields) so exports can be read back for checks
//! and tooling.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BullseyeError, Result};
use crate::types::EmployeeRecord;

/// Exported columns, in order
pub const CSV_HEADERS: [&str; 11] = [
    "employee_id",
    "email",
    "title",
    "org_level_1",
    "org_level_2",
    "org_level_3",
    "org_level_4",
    "org_level_5",
    "city",
    "state",
    "country",
];

/// One exported row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    pub employee_id: u32,
    pub email: String,
    pub title: String,
    pub org_level_1: String,
    pub org_level_2: String,
    pub org_level_3: String,
    pub org_level_4: String,
    pub org_level_5: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl From<&EmployeeRecord> for CsvRow {
    fn from(record: &EmployeeRecord) -> Self {
        let p = &record.profile;
        Self {
            employee_id: p.id,
            email: p.email.clone(),
            title: p.title.clone(),
            org_level_1: p.org_level_1.clone(),
            org_level_2: p.org_level_2.clone(),
            org_level_3: p.org_level_3.clone(),
            org_level_4: p.org_level_4.clone(),
            org_level_5: p.org_level_5.clone(),
            city: p.location.city.clone(),
            state: p.location.state.clone(),
            country: p.location.country.clone(),
        }
    }
}

impl CsvRow {
    fn values(&self) -> [String; 11] {
        [
            self.employee_id.to_string(),
            self.email.clone(),
            self.title.clone(),
            self.org_level_1.clone(),
            self.org_level_2.clone(),
            self.org_level_3.clone(),
            self.org_level_4.clone(),
            self.org_level_5.clone(),
            self.city.clone(),
            self.state.clone(),
            self.country.clone(),
        ]
    }

    fn from_fields(line: usize, fields: Vec<String>) -> Result<Self> {
        let [id, email, title, o1, o2, o3, o4, o5, city, state, country]: [String; 11] = fields
            .try_into()
            .map_err(|f: Vec<String>| {
                BullseyeError::csv(line, format!("expected 11 fields, found {}", f.len()))
            })?;
        let employee_id = id
            .trim()
            .parse()
            .map_err(|_| BullseyeError::csv(line, format!("invalid employee_id {id:?}")))?;
        Ok(Self {
            employee_id,
            email,
            title,
            org_level_1: o1,
            org_level_2: o2,
            org_level_3: o3,
            org_level_4: o4,
            org_level_5: o5,
            city,
            state,
            country,
        })
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_line<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| quote(v.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render records as CSV text: header line plus one row per record
pub fn to_csv(records: &[EmployeeRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(csv_line(CSV_HEADERS.as_slice()));
    lines.extend(
        records
            .iter()
            .map(|r| csv_line(CsvRow::from(r).values().as_slice())),
    );
    debug!("Exported {} rows", records.len());
    lines.join("\n")
}

/// A record's fields with the line it starts on
type RawRecord = (usize, Vec<String>);

/// Split CSV text into records. Quoted fields may span lines.
fn split_records(text: &str) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line_no = 1;
    let mut start = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => {
                in_quotes = true;
                quoted = true;
            }
            ('"', false) => {
                return Err(BullseyeError::csv(line_no, "stray quote in bare field"));
            }
            (',', false) => fields.push(std::mem::take(&mut field)),
            ('\r', false) if chars.peek() == Some(&'\n') => {}
            ('\n', false) => {
                fields.push(std::mem::take(&mut field));
                push_record(&mut records, start, std::mem::take(&mut fields), quoted);
                quoted = false;
                line_no += 1;
                start = line_no;
            }
            ('\n', true) => {
                field.push('\n');
                line_no += 1;
            }
            (c, _) => field.push(c),
        }
    }
    if in_quotes {
        return Err(BullseyeError::csv(start, "unterminated quoted field"));
    }
    fields.push(field);
    push_record(&mut records, start, fields, quoted);
    Ok(records)
}

/// Keep a finished record unless it is a blank line
fn push_record(records: &mut Vec<RawRecord>, start: usize, fields: Vec<String>, quoted: bool) {
    let blank = !quoted && fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        records.push((start, fields));
    }
}

/// Parse CSV text produced by [`to_csv`]
pub fn parse_csv(text: &str) -> Result<Vec<CsvRow>> {
    let mut records = split_records(text)?.into_iter();

    let (header_no, header) = records
        .next()
        .ok_or_else(|| BullseyeError::csv(1, "missing header"))?;
    if header != CSV_HEADERS {
        return Err(BullseyeError::csv(header_no, "unexpected header"));
    }

    records
        .map(|(no, fields)| CsvRow::from_fields(no, fields))
        .collect()
}
