use std::io::{self, Write};

use crate::models::{MatchMode, MatchReport, Matching, Student};

const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

/// Print each pair once, then everyone left without a partner
pub fn print_matching<W: Write>(out: &mut W, students: &[Student], matching: &Matching) -> io::Result<()> {
    for (a, b) in matching.pairs() {
        let (Some(sa), Some(sb)) = (students.get(a), students.get(b)) else {
            continue;
        };
        let (first, second) = if sa.name <= sb.name {
            (&sa.name, &sb.name)
        } else {
            (&sb.name, &sa.name)
        };
        writeln!(out, "{} matched with {}", first, second)?;
    }

    for index in matching.unmatched() {
        if let Some(student) = students.get(index) {
            writeln!(
                out,
                "{}\n Could not match: {}. Make specific arrangements.{}",
                RED, student.name, RESET
            )?;
        }
    }

    Ok(())
}

/// Print the full outcome of a run
pub fn print_report<W: Write>(out: &mut W, students: &[Student], report: &MatchReport) -> io::Result<()> {
    match &report.mode {
        MatchMode::Search(search) => {
            if search.odd_count {
                writeln!(
                    out,
                    "{}WARNING: Odd number of students, will try to match everyone except one student!{}",
                    YELLOW, RESET
                )?;
            }
            match &search.found {
                Some(found) => {
                    print_matching(out, students, &found.matching)?;
                    writeln!(out, "--------------------------------")?;
                    writeln!(out, "Full matching found")?;
                    writeln!(out, "Maximum cutoff: {}", found.cutoff)?;
                }
                None => writeln!(out, "Full matching not possible")?,
            }
        }
        MatchMode::Explicit { cutoff } => {
            if let Some(matching) = &report.matching {
                print_matching(out, students, matching)?;
                writeln!(out, "--------------------------------------")?;
                writeln!(
                    out,
                    "Matching found with {} students matched using cutoff {}",
                    matching.matched_count(),
                    cutoff
                )?;
            }
        }
    }
    Ok(())
}
