use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::models::{Matching, PartnerRow, Student};

/// Errors that can occur while exporting a pairing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Rows to export: one per matched participant, in roster order
pub fn partner_rows(students: &[Student], matching: &Matching) -> Vec<PartnerRow> {
    students
        .iter()
        .enumerate()
        .filter_map(|(index, student)| {
            matching
                .partner(index)
                .and_then(|partner| students.get(partner))
                .map(|partner| PartnerRow::new(student, partner))
        })
        .collect()
}

/// Write the pairing without a header row; returns the number of rows written
pub fn write_pairing<W: Write>(
    writer: W,
    students: &[Student],
    matching: &Matching,
) -> Result<usize, ExportError> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let rows = partner_rows(students, matching);
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    Ok(rows.len())
}

/// Write the pairing to a file, replacing any previous content
pub fn save_pairing<P: AsRef<Path>>(
    path: P,
    students: &[Student],
    matching: &Matching,
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let written = write_pairing(file, students, matching)?;
    tracing::info!("Wrote {} rows to {}", written, path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn create_student(id: &str) -> Student {
        Student::new(
            format!("Name {}", id),
            format!("{}@uni.edu", id),
            format!("{}, room 1", id),
            0,
            0,
            Availability::empty(4),
        )
    }

    #[test]
    fn test_rows_skip_unmatched() {
        let students: Vec<Student> = ["a", "b", "c"].iter().map(|id| create_student(id)).collect();
        let matching = Matching::from_pairs(3, &[(0, 2)]).unwrap();

        let rows = partner_rows(&students, &matching);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].email, "a@uni.edu");
        assert_eq!(rows[0].partner_email, "c@uni.edu");
        assert_eq!(rows[1].email, "c@uni.edu");
        assert_eq!(rows[1].partner_contact, "a, room 1");
    }

    #[test]
    fn test_written_csv_layout() {
        let students: Vec<Student> = ["a", "b"].iter().map(|id| create_student(id)).collect();
        let matching = Matching::from_pairs(2, &[(0, 1)]).unwrap();

        let mut buffer = Vec::new();
        let written = write_pairing(&mut buffer, &students, &matching).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            text,
            "a@uni.edu,Name a,b@uni.edu,Name b,\"b, room 1\"\n\
             b@uni.edu,Name b,a@uni.edu,Name a,\"a, room 1\"\n"
        );
    }

    #[test]
    fn test_empty_matching_writes_nothing() {
        let students = vec![create_student("a")];
        let mut buffer = Vec::new();

        let written = write_pairing(&mut buffer, &students, &Matching::empty(1)).unwrap();

        assert_eq!(written, 0);
        assert!(buffer.is_empty());
    }
}
