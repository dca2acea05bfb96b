//! Loads a draw-history CSV into `DrawRecord`s.
//!
//! Expected layout: a header row, then one draw per line as
//! `date,n1,n2,n3,n4,n5,n6` with the date written dd/mm/yyyy. All
//! validation happens here; the engine takes loaded records as valid.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use log::{info, warn};

use crate::model::{DrawRecord, NUMBERS_PER_DRAW};

pub fn load_draws(path: &Path) -> Result<Vec<DrawRecord>> {
    let file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut draws = Vec::new();
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line =
            line.with_context(|| format!("cannot read line {} of {}", index + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(draw) => draws.push(draw),
            Err(err) => warn!("skipping line {}: {:#}", index + 1, err),
        }
    }

    draws.sort_by(|a, b| a.date.cmp(&b.date));
    info!("loaded {} draws from {}", draws.len(), path.display());
    Ok(draws)
}

fn parse_line(line: &str) -> Result<DrawRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 1 + NUMBERS_PER_DRAW {
        bail!(
            "expected {} columns, found {}",
            1 + NUMBERS_PER_DRAW,
            fields.len()
        );
    }

    let raw_date = fields[0].trim_matches('"');
    let date = NaiveDate::parse_from_str(raw_date, "%d/%m/%Y")
        .with_context(|| format!("invalid date '{}'", raw_date))?;

    let mut numbers = [0u8; NUMBERS_PER_DRAW];
    for (slot, field) in numbers.iter_mut().zip(&fields[1..=NUMBERS_PER_DRAW]) {
        let raw = field.trim_matches('"');
        *slot = raw
            .parse::<u8>()
            .with_context(|| format!("invalid number '{}'", raw))?;
    }

    DrawRecord::new(date, numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Data,Dezena 1,Dezena 2,Dezena 3,Dezena 4,Dezena 5,Dezena 6").unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_loads_and_sorts_by_date() {
        let file = write_csv(&[
            "15/06/2022,10,11,12,13,14,15",
            "31/12/2021,01,05,23,42,57,60",
        ]);
        let draws = load_draws(file.path()).unwrap();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].date, NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
        assert_eq!(draws[0].numbers, [1, 5, 23, 42, 57, 60]);
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let file = write_csv(&[
            "notadate,1,2,3,4,5,6",
            "10/01/2023,1,2,3",
            "11/01/2023,7,7,9,10,11,12",
            "12/01/2023,1,2,3,4,5,99",
            "13/01/2023,20,21,22,23,24,25",
        ]);
        let draws = load_draws(file.path()).unwrap();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].numbers, [20, 21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_file_with_no_usable_rows_is_empty() {
        let file = write_csv(&[]);
        let draws = load_draws(file.path()).unwrap();
        assert!(draws.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_draws(Path::new("no-such-file.csv")).is_err());
    }
}
