// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Reference instant parsing: explicit operator input, or the session
//! date-time embedded in a path such as
//! `ecephys_686740_2023-10-23_14-11-05/behavior/log.csv`.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::ReferenceTimeError;

const REFERENCE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d_%H:%M:%S%.f",
    "%Y-%m-%d %H-%M-%S",
    "%Y-%m-%d_%H-%M-%S",
    "%Y-%m-%dT%H-%M-%S",
];

// YYYY-MM-DD?HH?MM?SS
const STAMP_LEN: usize = 19;

pub fn parse_reference_time(value: &str) -> Result<NaiveDateTime, ReferenceTimeError> {
    let trimmed = value.trim();
    REFERENCE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ReferenceTimeError::Unparseable {
            value: value.to_string(),
        })
}

/// First session date-time found anywhere in `path`.
pub fn reference_time_from_path(path: &Path) -> Result<NaiveDateTime, ReferenceTimeError> {
    let text = path.to_string_lossy();
    let bytes = text.as_bytes();
    (0..bytes.len().saturating_sub(STAMP_LEN - 1))
        .filter(|&start| looks_like_stamp(&bytes[start..start + STAMP_LEN]))
        .find_map(|start| parse_stamp(&bytes[start..start + STAMP_LEN]))
        .ok_or_else(|| ReferenceTimeError::NotInPath {
            path: text.to_string(),
        })
}

fn looks_like_stamp(window: &[u8]) -> bool {
    window.iter().enumerate().all(|(idx, b)| match idx {
        4 | 7 => *b == b'-',
        10 => matches!(b, b' ' | b'_' | b'T'),
        13 | 16 => matches!(b, b'-' | b':'),
        _ => b.is_ascii_digit(),
    })
}

fn parse_stamp(window: &[u8]) -> Option<NaiveDateTime> {
    let normalized: String = window
        .iter()
        .enumerate()
        .map(|(idx, b)| match idx {
            10 => ' ',
            13 | 16 => ':',
            _ => char::from(*b),
        })
        .collect();
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expected() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 23)
            .unwrap()
            .and_hms_opt(14, 11, 5)
            .unwrap()
    }

    #[test]
    fn explicit_layouts() {
        for raw in [
            "2023-10-23 14:11:05",
            "2023-10-23 14-11-05",
            "2023-10-23_14-11-05",
            "2023-10-23T14:11:05",
            " 2023-10-23T14:11:05.000 ",
        ] {
            assert_eq!(parse_reference_time(raw), Ok(expected()), "{raw}");
        }
    }

    #[test]
    fn explicit_garbage_is_rejected() {
        assert_eq!(
            parse_reference_time("yesterday"),
            Err(ReferenceTimeError::Unparseable {
                value: "yesterday".to_string()
            })
        );
    }

    #[test]
    fn session_folder_in_path() {
        let path = Path::new("s3://aind-ephys-data/ecephys_686740_2023-10-23_14-11-05/behavior/log.csv");
        assert_eq!(reference_time_from_path(path), Ok(expected()));
    }

    #[test]
    fn invalid_calendar_values_are_skipped() {
        let path = Path::new("/data/2023-13-40_99-99-99/then_2023-10-23_14-11-05/log.csv");
        assert_eq!(reference_time_from_path(path), Ok(expected()));
    }

    #[test]
    fn path_without_time_is_an_error() {
        let err = reference_time_from_path(Path::new("/data/behavior/log.csv")).unwrap_err();
        assert!(matches!(err, ReferenceTimeError::NotInPath { .. }));
        assert!(reference_time_from_path(Path::new("")).is_err());
    }
}
