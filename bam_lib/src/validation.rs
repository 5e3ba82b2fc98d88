use std::sync::OnceLock;

use chrono::format::ParseErrorKind;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use thiserror::Error;

/// Plain ISO 8601 date, e.g. `2023-05-11`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// ISO 8601 UTC date-time with fractional seconds, e.g. `2023-05-13T14:30:00.000000Z`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
/// Formats accepted by the exchange-rate endpoints.
pub const EXCHANGE_RATE_DATE_FORMATS: &[&str] = &[DATE_FORMAT, DATE_TIME_FORMAT];

/// Instrument name-to-acronym mapping for monetary policy operations.
/// Users can pass either form; the API only understands the acronym.
pub const INSTRUMENTS: &[(&str, &str)] = &[
    ("avances_7j", "AVANCES7J"),
    ("avances_24h", "AVANCES24H"),
    ("opérations_de_réglage_fin_pension_livrée", "PENSLRF"),
    ("opérations_de_long_terme_pension_livrée", "PENSLLT"),
    ("opérations_de_long_terme_prêt_garanti", "PRETGAR"),
];

/// Rejected caller input. Always raised before any request is sent.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid date '{input}' for format '{format}': {source}")]
    InvalidDate {
        input: String,
        format: String,
        source: chrono::ParseError,
    },
    #[error(
        "the provided date string '{input}' is not in a valid format. Use one of: {}",
        .formats.join(", ")
    )]
    UnsupportedDateFormat { input: String, formats: Vec<String> },
    #[error("invalid date '{input}' for format '{format}': fractional seconds must be 1 to 6 digits")]
    InvalidFraction { input: String, format: String },
    #[error("'{0}' is not a valid currency label (expected three uppercase letters, e.g. EUR)")]
    InvalidCurrency(String),
    #[error("unknown instrument '{input}'. Valid acronyms: {}", .valid.join(", "))]
    UnknownInstrument { input: String, valid: Vec<String> },
}

/// Validate a date string against one or more chrono format patterns.
///
/// An empty string means "let the server choose" and passes unless `strict`
/// is set, in which case it is parsed like any other input and fails. With a
/// single format the parse error is kept; with several, the error lists them.
pub fn validate_date(input: &str, formats: &[&str], strict: bool) -> Result<(), ValidationError> {
    if input.is_empty() && !strict {
        return Ok(());
    }

    if let [format] = formats {
        return parse_with_format(input, format).map_err(|mismatch| match mismatch {
            Mismatch::Parse(source) => ValidationError::InvalidDate {
                input: input.to_string(),
                format: format.to_string(),
                source,
            },
            Mismatch::Fraction => ValidationError::InvalidFraction {
                input: input.to_string(),
                format: format.to_string(),
            },
        });
    }

    if formats
        .iter()
        .any(|format| parse_with_format(input, format).is_ok())
    {
        return Ok(());
    }

    Err(ValidationError::UnsupportedDateFormat {
        input: input.to_string(),
        formats: formats.iter().map(|f| f.to_string()).collect(),
    })
}

enum Mismatch {
    Parse(chrono::ParseError),
    Fraction,
}

/// Full-match parse. Date-only formats lack a time, so they fall back to
/// `NaiveDate` when the date-time parse reports missing fields.
fn parse_with_format(input: &str, format: &str) -> Result<(), Mismatch> {
    match NaiveDateTime::parse_from_str(input, format) {
        Ok(_) => {}
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {
            NaiveDate::parse_from_str(input, format).map_err(Mismatch::Parse)?;
        }
        Err(e) => return Err(Mismatch::Parse(e)),
    }
    if format.contains("%.f") && !has_microsecond_fraction(input) {
        return Err(Mismatch::Fraction);
    }
    Ok(())
}

/// chrono's `%.f` makes the fraction optional and takes up to nine digits;
/// the API wants `.` followed by one to six digits before the `Z`.
fn has_microsecond_fraction(input: &str) -> bool {
    input
        .strip_suffix('Z')
        .and_then(|rest| rest.rsplit_once('.'))
        .is_some_and(|(_, digits)| {
            (1..=6).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
        })
}

fn currency_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Z]{3}$").ok())
        .as_ref()
}

/// Validate a currency label. Empty means "all currencies"; otherwise exactly
/// three uppercase ASCII letters.
pub fn validate_currency(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() || currency_pattern().is_some_and(|re| re.is_match(input)) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrency(input.to_string()))
    }
}

/// Resolve an instrument given by name (case-insensitive) or acronym to the
/// acronym the API expects. Empty input passes through as "no filter".
pub fn resolve_instrument(input: &str) -> Result<String, ValidationError> {
    if input.is_empty() {
        return Ok(String::new());
    }
    let upper = input.to_uppercase();

    for &(name, acronym) in INSTRUMENTS {
        if upper == name.to_uppercase() || upper == acronym {
            return Ok(acronym.to_string());
        }
    }

    tracing::debug!("no instrument matches '{}'", input);
    Err(ValidationError::UnknownInstrument {
        input: input.to_string(),
        valid: INSTRUMENTS.iter().map(|(_, a)| a.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Date validation --

    #[test]
    fn date_only_matches_first_format() {
        assert!(validate_date("2023-01-01", EXCHANGE_RATE_DATE_FORMATS, false).is_ok());
    }

    #[test]
    fn date_time_matches_second_format() {
        assert!(
            validate_date("2023-05-13T14:30:00.000000Z", EXCHANGE_RATE_DATE_FORMATS, false)
                .is_ok()
        );
    }

    #[test]
    fn single_format_valid() {
        assert!(validate_date("2024-01-01", &[DATE_FORMAT], false).is_ok());
    }

    #[test]
    fn empty_passes_when_not_strict() {
        assert!(validate_date("", &[DATE_FORMAT], false).is_ok());
        assert!(validate_date("", EXCHANGE_RATE_DATE_FORMATS, false).is_ok());
    }

    #[test]
    fn empty_fails_when_strict() {
        assert!(matches!(
            validate_date("", &[DATE_FORMAT], true),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            validate_date("", EXCHANGE_RATE_DATE_FORMATS, true),
            Err(ValidationError::UnsupportedDateFormat { .. })
        ));
    }

    #[test]
    fn strict_still_accepts_valid_date() {
        assert!(validate_date("2022-04-04", &[DATE_FORMAT], true).is_ok());
    }

    #[test]
    fn reordered_date_fails_all_formats() {
        let err = validate_date(
            "05-2023-13T14:30:00.000000Z",
            EXCHANGE_RATE_DATE_FORMATS,
            false,
        )
        .unwrap_err();
        match err {
            ValidationError::UnsupportedDateFormat { formats, .. } => {
                assert_eq!(formats, vec![DATE_FORMAT, DATE_TIME_FORMAT]);
            }
            other => panic!("expected UnsupportedDateFormat, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_date_keeps_parse_error() {
        let err = validate_date("2024-00-00", &[DATE_FORMAT], false).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn impossible_calendar_date() {
        assert!(validate_date("2023-02-30", &[DATE_FORMAT], false).is_err());
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(validate_date(" ", &[DATE_FORMAT], false).is_err());
    }

    #[test]
    fn date_only_format_rejects_date_time() {
        assert!(validate_date("2023-05-13T14:30:00.000000Z", &[DATE_FORMAT], false).is_err());
    }

    #[test]
    fn date_time_format_rejects_date_only() {
        assert!(validate_date("2023-05-13", &[DATE_TIME_FORMAT], false).is_err());
    }

    #[test]
    fn date_time_requires_fraction() {
        assert!(matches!(
            validate_date("2023-05-13T14:30:00Z", &[DATE_TIME_FORMAT], false),
            Err(ValidationError::InvalidFraction { .. })
        ));
        assert!(matches!(
            validate_date("2023-05-13T14:30:00Z", EXCHANGE_RATE_DATE_FORMATS, false),
            Err(ValidationError::UnsupportedDateFormat { .. })
        ));
    }

    #[test]
    fn date_time_fraction_at_most_six_digits() {
        assert!(matches!(
            validate_date("2023-05-13T14:30:00.123456789Z", &[DATE_TIME_FORMAT], false),
            Err(ValidationError::InvalidFraction { .. })
        ));
        assert!(validate_date("2023-05-13T14:30:00.1234567Z", EXCHANGE_RATE_DATE_FORMATS, false).is_err());
    }

    #[test]
    fn date_time_fraction_one_to_six_digits() {
        for input in ["2023-05-13T14:30:00.1Z", "2023-05-13T14:30:00.123Z", "2023-05-13T14:30:00.123456Z"] {
            assert!(validate_date(input, &[DATE_TIME_FORMAT], false).is_ok(), "{}", input);
        }
    }

    #[test]
    fn trailing_garbage_rejected() {
        assert!(validate_date("2023-05-13x", &[DATE_FORMAT], false).is_err());
    }

    #[test]
    fn error_message_names_formats() {
        let err = validate_date("nope", EXCHANGE_RATE_DATE_FORMATS, false).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(DATE_FORMAT));
        assert!(msg.contains(DATE_TIME_FORMAT));
    }

    // -- Currency validation --

    #[test]
    fn currency_valid_codes() {
        for code in ["EUR", "USD", "MAD", "QAR", "NOK", "GBP", "JPY", "CHF", "CAD", "SAR"] {
            assert!(validate_currency(code).is_ok(), "{} should be valid", code);
        }
    }

    #[test]
    fn currency_empty_means_all() {
        assert!(validate_currency("").is_ok());
    }

    #[test]
    fn currency_wrong_length() {
        assert!(validate_currency("MADD").is_err());
        assert!(validate_currency("CAAD").is_err());
        assert!(validate_currency("EU").is_err());
    }

    #[test]
    fn currency_lowercase() {
        assert!(validate_currency("eur").is_err());
        assert!(validate_currency("Eur").is_err());
    }

    #[test]
    fn currency_symbols_and_digits() {
        assert!(validate_currency("$").is_err());
        assert!(validate_currency("US1").is_err());
        assert!(validate_currency("E R").is_err());
    }

    #[test]
    fn currency_trailing_newline() {
        assert!(validate_currency("EUR\n").is_err());
    }

    #[test]
    fn currency_non_ascii_uppercase() {
        assert!(validate_currency("ÉUR").is_err());
    }

    // -- Instrument resolution --

    #[test]
    fn instrument_by_name() {
        for &(name, acronym) in INSTRUMENTS {
            assert_eq!(resolve_instrument(name).unwrap(), acronym);
        }
    }

    #[test]
    fn instrument_by_name_any_case() {
        for &(name, acronym) in INSTRUMENTS {
            assert_eq!(resolve_instrument(&name.to_uppercase()).unwrap(), acronym);
        }
        assert_eq!(resolve_instrument("Avances_7J").unwrap(), "AVANCES7J");
    }

    #[test]
    fn instrument_by_acronym() {
        for &(_, acronym) in INSTRUMENTS {
            assert_eq!(resolve_instrument(acronym).unwrap(), acronym);
        }
    }

    #[test]
    fn instrument_acronym_compared_upper_cased() {
        assert_eq!(resolve_instrument("penslrf").unwrap(), "PENSLRF");
    }

    #[test]
    fn instrument_empty_passes_through() {
        assert_eq!(resolve_instrument("").unwrap(), "");
    }

    #[test]
    fn instrument_unknown() {
        for input in ["invalid_name", "invalid_acronym", " ", "AVANCES7"] {
            assert!(matches!(
                resolve_instrument(input),
                Err(ValidationError::UnknownInstrument { .. })
            ));
        }
    }

    #[test]
    fn instrument_error_lists_acronyms() {
        let msg = resolve_instrument("bogus").unwrap_err().to_string();
        assert!(msg.contains("AVANCES7J"));
        assert!(msg.contains("PRETGAR"));
    }
}
