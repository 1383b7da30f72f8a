use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::models::{Availability, RosterLayout, Student};

/// Errors that can occur while loading the roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: missing column {column}")]
    MissingColumn { line: u64, column: usize },

    #[error("Line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: unknown time slot '{value}'")]
    UnknownTimeSlot { line: u64, value: String },
}

/// Load the roster from a file; any malformed row aborts the load
pub fn load_roster<P: AsRef<Path>>(path: P, layout: &RosterLayout) -> Result<Vec<Student>, RosterError> {
    let path = path.as_ref();
    tracing::info!("Loading roster from {}", path.display());
    let file = std::fs::File::open(path)?;
    parse_roster(file, layout)
}

/// Parse roster rows; the first row is a header and is skipped
pub fn parse_roster<R: Read>(reader: R, layout: &RosterLayout) -> Result<Vec<Student>, RosterError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut students = Vec::new();
    let mut seen_netids = HashSet::new();

    for record in reader.records() {
        let record = record?;
        let student = parse_student(&record, layout)?;

        if !seen_netids.insert(student.netid.clone()) {
            tracing::warn!("Duplicate participant id '{}' in roster", student.netid);
        }
        students.push(student);
    }

    tracing::info!("Loaded {} participants", students.len());
    Ok(students)
}

fn column_value(record: &StringRecord, column: usize, line: u64) -> Result<&str, RosterError> {
    record
        .get(column)
        .map(str::trim)
        .ok_or(RosterError::MissingColumn { line, column })
}

fn parse_student(record: &StringRecord, layout: &RosterLayout) -> Result<Student, RosterError> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() <= layout.max_column() {
        return Err(RosterError::MissingColumn {
            line,
            column: layout.max_column(),
        });
    }

    let field = |column: usize| column_value(record, column, line);

    let number = |column: usize, name: &'static str| -> Result<u32, RosterError> {
        let raw = field(column)?;
        raw.parse::<u32>().map_err(|_| RosterError::InvalidNumber {
            line,
            field: name,
            value: raw.to_string(),
        })
    };

    let start_preference = number(layout.start_preference, "start preference")?;
    let priority = number(layout.priority, "priority")?;

    let slots_per_day = layout.time_slots.len();
    let mut availability = Availability::empty(layout.grid_len());

    for (day, &column) in layout.availability.iter().enumerate() {
        for token in field(column)?.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let slot = layout
                .time_slots
                .iter()
                .position(|name| name == token)
                .ok_or_else(|| RosterError::UnknownTimeSlot {
                    line,
                    value: token.to_string(),
                })?;
            availability.set(day * slots_per_day + slot);
        }
    }

    Ok(Student::new(
        field(layout.name)?,
        field(layout.email)?,
        field(layout.contact)?,
        start_preference,
        priority,
        availability,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Timestamp,Name,Email,Contact,Start,Mon,Tue,Wed,Thu,Fri,Sat,Sun,Priority\n";

    fn roster(rows: &[&str]) -> String {
        let mut text = HEADER.to_string();
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_parse_valid_row() {
        let text = roster(&[
            "t,Ada Lovelace,al12@uni.edu,555-1234,2,\"Morning (7am-noon), Night (midnight-7am)\",,,,,,Evening (6pm-midnight),1",
        ]);
        let students = parse_roster(text.as_bytes(), &RosterLayout::default()).unwrap();

        assert_eq!(students.len(), 1);
        let ada = &students[0];
        assert_eq!(ada.name, "Ada Lovelace");
        assert_eq!(ada.netid, "al12");
        assert_eq!(ada.contact, "555-1234");
        assert_eq!(ada.start_preference, 2);
        assert_eq!(ada.priority, 1);
        assert_eq!(ada.availability.len(), 28);
        assert!(ada.availability.is_available(0));
        assert!(ada.availability.is_available(3));
        assert!(ada.availability.is_available(6 * 4 + 2));
        assert!(!ada.availability.is_available(1));
    }

    #[test]
    fn test_header_only_yields_empty_roster() {
        let students = parse_roster(HEADER.as_bytes(), &RosterLayout::default()).unwrap();
        assert!(students.is_empty());
    }

    #[test]
    fn test_bad_priority_aborts() {
        let text = roster(&[
            "t,A,a@uni.edu,x,1,,,,,,,,1",
            "t,B,b@uni.edu,x,1,,,,,,,,high",
        ]);
        let err = parse_roster(text.as_bytes(), &RosterLayout::default()).unwrap_err();

        assert!(matches!(err, RosterError::InvalidNumber { field: "priority", line: 3, .. }));
    }

    #[test]
    fn test_unknown_slot_aborts() {
        let text = roster(&["t,A,a@uni.edu,x,1,Brunch,,,,,,,1"]);
        let err = parse_roster(text.as_bytes(), &RosterLayout::default()).unwrap_err();

        assert!(matches!(err, RosterError::UnknownTimeSlot { ref value, .. } if value == "Brunch"));
    }

    #[test]
    fn test_short_row_reports_missing_column() {
        let text = roster(&["t,A,a@uni.edu,x,1"]);
        let err = parse_roster(text.as_bytes(), &RosterLayout::default()).unwrap_err();

        assert!(matches!(err, RosterError::MissingColumn { .. }));
    }

    #[test]
    fn test_custom_layout() {
        let layout = RosterLayout {
            name: 0,
            email: 1,
            contact: 2,
            start_preference: 3,
            availability: vec![4, 5],
            priority: 6,
            time_slots: vec!["am".to_string(), "pm".to_string()],
        };
        let text = "name,email,contact,start,d1,d2,prio\nBo,bo@x.org,@bo,0,pm,\"am,pm\",4\n";
        let students = parse_roster(text.as_bytes(), &layout).unwrap();

        let bits: Vec<bool> = (0..4).map(|i| students[0].availability.is_available(i)).collect();
        assert_eq!(bits, vec![false, true, true, true]);
        assert_eq!(students[0].priority, 4);
    }
}
