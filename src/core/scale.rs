//! Grading scale presets
//!
//! Presets are compiled-in `'static` tables. Every shipped preset currently aliases the
//! UGC 4.00 table; the institution presets only differ in name and description.

use super::error::GradeError;

/// Inclusive percentage band of a grade symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentBand {
    /// Lowest percentage in the band
    pub min: f64,
    /// Highest percentage in the band
    pub max: f64,
}

/// A scale-specific grade token with its grade-point value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeSymbol {
    /// Canonical token (e.g., "A+")
    pub token: &'static str,
    /// Grade-point value in [0.0, 4.0]
    pub grade_point: f64,
    /// Percentage band used for percentage resolution
    pub band: Option<PercentBand>,
}

impl GradeSymbol {
    const fn banded(token: &'static str, grade_point: f64, min: f64, max: f64) -> Self {
        Self {
            token,
            grade_point,
            band: Some(PercentBand { min, max }),
        }
    }
}

/// A named grading scale
#[derive(Debug, PartialEq)]
pub struct GradingScalePreset {
    /// Registry key (e.g., "ugc")
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Symbols in declared order (highest grade first)
    pub symbols: &'static [GradeSymbol],
    /// Short description shown next to the preset
    pub description: &'static str,
}

impl GradingScalePreset {
    /// Look up a symbol by token, ignoring case
    #[must_use]
    pub fn symbol(&self, token: &str) -> Option<&'static GradeSymbol> {
        let wanted = token.trim();
        self.symbols
            .iter()
            .find(|s| s.token.eq_ignore_ascii_case(wanted))
    }

    /// Banded symbols ordered by descending band minimum
    #[must_use]
    pub fn bands_descending(&self) -> Vec<(&'static GradeSymbol, PercentBand)> {
        let mut bands: Vec<_> = self
            .symbols
            .iter()
            .filter_map(|s| s.band.map(|b| (s, b)))
            .collect();
        bands.sort_by(|a, b| b.1.min.total_cmp(&a.1.min));
        bands
    }

    /// Highest grade-point of any symbol in this preset
    #[must_use]
    pub fn max_grade_point(&self) -> f64 {
        self.symbols
            .iter()
            .map(|s| s.grade_point)
            .fold(0.0, f64::max)
    }
}

/// UGC 4.00 grade table
pub const UGC_SYMBOLS: &[GradeSymbol] = &[
    GradeSymbol::banded("A+", 4.0, 80.0, 100.0),
    GradeSymbol::banded("A", 3.75, 75.0, 79.0),
    GradeSymbol::banded("A-", 3.5, 70.0, 74.0),
    GradeSymbol::banded("B+", 3.25, 65.0, 69.0),
    GradeSymbol::banded("B", 3.0, 60.0, 64.0),
    GradeSymbol::banded("B-", 2.75, 55.0, 59.0),
    GradeSymbol::banded("C+", 2.5, 50.0, 54.0),
    GradeSymbol::banded("C", 2.25, 45.0, 49.0),
    GradeSymbol::banded("D", 2.0, 40.0, 44.0),
    GradeSymbol::banded("F", 0.0, 0.0, 39.0),
];

const fn ugc_preset(
    id: &'static str,
    display_name: &'static str,
    description: &'static str,
) -> GradingScalePreset {
    GradingScalePreset {
        id,
        display_name,
        symbols: UGC_SYMBOLS,
        description,
    }
}

/// Id of the preset used when nothing else is configured
pub const DEFAULT_PRESET_ID: &str = "ugc";

static PRESETS: [GradingScalePreset; 10] = [
    ugc_preset(
        "ugc",
        "UGC Standard",
        "A+ (4.00), A (3.75), A- (3.50), B+ (3.25), B (3.00), B- (2.75), C+ (2.50), C (2.25), D (2.00), F (0.00)",
    ),
    ugc_preset("du", "University of Dhaka (DU)", "Follows UGC standard with 4.00 scale"),
    ugc_preset("buet", "BUET", "BUET follows UGC grading system"),
    ugc_preset("nsu", "North South University (NSU)", "NSU uses 4.00 scale with UGC mapping"),
    ugc_preset("brac", "BRAC University", "BRAC follows standard UGC grading"),
    ugc_preset("iub", "Independent University Bangladesh (IUB)", "IUB uses 4.00 point scale"),
    ugc_preset("ruet", "RUET", "RUET follows UGC standard grading"),
    ugc_preset("aust", "AUST", "AUST uses standard 4.00 scale"),
    ugc_preset("iut", "Islamic University of Technology (IUT)", "IUT follows UGC grading system"),
    ugc_preset("custom", "Custom Grading Scale", "Define your own grading scale"),
];

/// Get a preset by id
///
/// # Errors
/// Returns `GradeError::UnknownPreset` if no preset is registered under `id`
pub fn get_preset(id: &str) -> Result<&'static GradingScalePreset, GradeError> {
    PRESETS
        .iter()
        .find(|p| p.id == id.trim())
        .ok_or_else(|| GradeError::UnknownPreset { id: id.to_string() })
}

/// The default (UGC) preset
#[must_use]
pub fn default_preset() -> &'static GradingScalePreset {
    &PRESETS[0]
}

/// All presets as `(id, display_name)` in stable declared order
pub fn list_presets() -> impl Iterator<Item = (&'static str, &'static str)> {
    PRESETS.iter().map(|p| (p.id, p.display_name))
}
