//! Grade resolver
//!
//! Converts a raw grade input (letter, percentage or GPA) into a normalized
//! grade-point value and display label under a grading preset.

use super::error::GradeError;
use super::scale::GradingScalePreset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a raw grade value should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// A grade symbol such as "A-"
    Letter,
    /// A percentage mark in [0, 100]
    Percentage,
    /// A grade-point value taken as given
    Gpa,
}

impl InputMode {
    /// Lowercase name used in exports and persisted data
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Percentage => "percentage",
            Self::Gpa => "gpa",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "letter" | "grade" => Ok(Self::Letter),
            "percentage" | "percent" | "%" => Ok(Self::Percentage),
            "gpa" | "point" | "points" => Ok(Self::Gpa),
            _ => Err(format!("Unknown input mode: {s}")),
        }
    }
}

/// The user-supplied grade value together with its interpretation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum GradeInput {
    /// Grade symbol text, as typed
    Letter(String),
    /// Percentage mark
    Percentage(f64),
    /// Grade-point value
    Gpa(f64),
}

impl GradeInput {
    /// The interpretation mode of this input
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        match self {
            Self::Letter(_) => InputMode::Letter,
            Self::Percentage(_) => InputMode::Percentage,
            Self::Gpa(_) => InputMode::Gpa,
        }
    }

    /// Build an input from text under an explicit mode
    ///
    /// # Errors
    /// Returns `GradeError::InvalidNumber` if a percentage or GPA value is not numeric
    pub fn parse(mode: InputMode, text: &str) -> Result<Self, GradeError> {
        match mode {
            InputMode::Letter => Ok(Self::Letter(text.trim().to_string())),
            InputMode::Percentage => {
                let cleaned = text.trim().trim_end_matches('%').trim();
                parse_number(cleaned)
                    .map(Self::Percentage)
                    .ok_or_else(|| GradeError::InvalidNumber {
                        value: text.to_string(),
                    })
            }
            InputMode::Gpa => parse_number(text)
                .map(Self::Gpa)
                .ok_or_else(|| GradeError::InvalidNumber {
                    value: text.to_string(),
                }),
        }
    }

    /// Build an input from free-form text, guessing the mode with [`detect_mode`]
    ///
    /// # Errors
    /// Returns `GradeError::InvalidNumber` if the guessed mode is numeric but the text is not
    pub fn detect(text: &str) -> Result<Self, GradeError> {
        let (mode, normalized) = detect_mode(text);
        Self::parse(mode, &normalized)
    }
}

/// A resolved grade: numeric value and display label
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Grade-point value
    pub grade_point: f64,
    /// Label shown to the user
    pub label: String,
}

/// Parse a finite number, ignoring surrounding whitespace
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Guess the input mode of free-form grade text (used by CSV import)
///
/// A value containing `%`, or a number above 4, is a percentage; a number up to 4 is
/// a GPA; anything else is a letter grade. A bare "4" is therefore read as GPA 4.0,
/// never as a letter. The returned text has the percent marker removed.
#[must_use]
pub fn detect_mode(text: &str) -> (InputMode, String) {
    let trimmed = text.trim();
    if trimmed.contains('%') {
        return (InputMode::Percentage, trimmed.replace('%', "").trim().to_string());
    }
    match parse_number(trimmed) {
        Some(v) if v > 4.0 => (InputMode::Percentage, trimmed.to_string()),
        Some(_) => (InputMode::Gpa, trimmed.to_string()),
        None => (InputMode::Letter, trimmed.to_string()),
    }
}

/// Resolve a grade input against a preset
///
/// # Errors
/// - `UnknownGradeSymbol` if a letter is not in the preset
/// - `OutOfRange` if a percentage is outside [0, 100]
/// - `NoMatchingBand` if no band of the preset reaches the percentage
pub fn resolve(input: &GradeInput, preset: &GradingScalePreset) -> Result<Resolution, GradeError> {
    match input {
        GradeInput::Letter(symbol) => {
            let matched = preset
                .symbol(symbol)
                .ok_or_else(|| GradeError::UnknownGradeSymbol {
                    symbol: symbol.clone(),
                })?;
            Ok(Resolution {
                grade_point: matched.grade_point,
                label: matched.token.to_string(),
            })
        }
        GradeInput::Percentage(percent) => resolve_percentage(*percent, preset),
        GradeInput::Gpa(gpa) => Ok(Resolution {
            grade_point: *gpa,
            label: format!("{gpa:.2}"),
        }),
    }
}

/// Highest band whose floor the percentage reaches wins, so boundary values
/// and fractional values between integer bands go to the upper band.
fn resolve_percentage(percent: f64, preset: &GradingScalePreset) -> Result<Resolution, GradeError> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(GradeError::OutOfRange { value: percent });
    }

    preset
        .bands_descending()
        .into_iter()
        .find(|(_, band)| percent >= band.min)
        .map(|(symbol, _)| Resolution {
            grade_point: symbol.grade_point,
            label: symbol.token.to_string(),
        })
        .ok_or(GradeError::NoMatchingBand { percent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scale::{default_preset, GradeSymbol, PercentBand};

    fn label_for(percent: f64) -> Result<String, GradeError> {
        resolve(&GradeInput::Percentage(percent), default_preset()).map(|r| r.label)
    }

    #[test]
    fn test_letter_resolution_is_case_insensitive() {
        let res = resolve(&GradeInput::Letter("b+".to_string()), default_preset()).unwrap();
        assert_eq!(res.label, "B+");
        assert!((res.grade_point - 3.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_letter() {
        let err = resolve(&GradeInput::Letter("E".to_string()), default_preset()).unwrap_err();
        assert_eq!(
            err,
            GradeError::UnknownGradeSymbol {
                symbol: "E".to_string()
            }
        );
    }

    #[test]
    fn test_percentage_boundaries() {
        assert_eq!(label_for(80.0).unwrap(), "A+");
        assert_eq!(label_for(79.0).unwrap(), "A");
        assert_eq!(label_for(39.0).unwrap(), "F");
        assert_eq!(label_for(40.0).unwrap(), "D");
        assert_eq!(label_for(100.0).unwrap(), "A+");
        assert_eq!(label_for(0.0).unwrap(), "F");
    }

    #[test]
    fn test_fractional_percentage_between_bands() {
        assert_eq!(label_for(79.5).unwrap(), "A");
        assert_eq!(label_for(39.9).unwrap(), "F");
    }

    #[test]
    fn test_percentage_out_of_range() {
        assert_eq!(label_for(101.0), Err(GradeError::OutOfRange { value: 101.0 }));
        assert_eq!(label_for(-0.5), Err(GradeError::OutOfRange { value: -0.5 }));
        assert!(matches!(
            label_for(f64::NAN),
            Err(GradeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_no_matching_band() {
        static PARTIAL: &[GradeSymbol] = &[GradeSymbol {
            token: "P",
            grade_point: 4.0,
            band: Some(PercentBand {
                min: 50.0,
                max: 100.0,
            }),
        }];
        let preset = GradingScalePreset {
            id: "partial",
            display_name: "Partial",
            symbols: PARTIAL,
            description: "",
        };
        assert_eq!(
            resolve(&GradeInput::Percentage(20.0), &preset),
            Err(GradeError::NoMatchingBand { percent: 20.0 })
        );
    }

    #[test]
    fn test_gpa_is_not_clamped() {
        let res = resolve(&GradeInput::Gpa(4.3), default_preset()).unwrap();
        assert!((res.grade_point - 4.3).abs() < f64::EPSILON);
        assert_eq!(res.label, "4.30");
    }

    #[test]
    fn test_detect_mode() {
        assert_eq!(detect_mode("85%"), (InputMode::Percentage, "85".to_string()));
        assert_eq!(detect_mode("72"), (InputMode::Percentage, "72".to_string()));
        assert_eq!(detect_mode("3.5"), (InputMode::Gpa, "3.5".to_string()));
        assert_eq!(detect_mode("4"), (InputMode::Gpa, "4".to_string()));
        assert_eq!(detect_mode("A+"), (InputMode::Letter, "A+".to_string()));
        assert_eq!(detect_mode("NaN"), (InputMode::Letter, "NaN".to_string()));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(GradeInput::parse(InputMode::Gpa, "abc").is_err());
        assert_eq!(
            GradeInput::parse(InputMode::Percentage, " 67% ").unwrap(),
            GradeInput::Percentage(67.0)
        );
        assert!(GradeInput::detect("x%").unwrap_err().is_validation());
    }

    #[test]
    fn test_input_mode_from_str() {
        assert_eq!("Letter".parse::<InputMode>(), Ok(InputMode::Letter));
        assert_eq!("percent".parse::<InputMode>(), Ok(InputMode::Percentage));
        assert!("bogus".parse::<InputMode>().is_err());
    }

    #[test]
    fn test_grade_input_json_shape() {
        let json = serde_json::to_string(&GradeInput::Percentage(82.0)).unwrap();
        assert_eq!(json, r#"{"mode":"percentage","value":82.0}"#);
        let back: GradeInput = serde_json::from_str(r#"{"mode":"letter","value":"A"}"#).unwrap();
        assert_eq!(back, GradeInput::Letter("A".to_string()));
    }
}
