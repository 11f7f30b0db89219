//! Subjective temperature labels

use std::fmt::Display;

use serde::{Serialize, Serializer};

/// Label summarizing how a temperature feels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempVibe {
    Freezing,
    Cold,
    Perfect,
    Warm,
    Hot,
    /// Celsius readings are not converted; the label says so instead
    NeedsFahrenheit,
    Unknown,
}

impl TempVibe {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TempVibe::Freezing => "freezing",
            TempVibe::Cold => "cold",
            TempVibe::Perfect => "perfect",
            TempVibe::Warm => "warm",
            TempVibe::Hot => "hot",
            TempVibe::NeedsFahrenheit => "Convert to Fahrenheit for vibe",
            TempVibe::Unknown => "unknown",
        }
    }
}

impl Display for TempVibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TempVibe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Derive the vibe for a temperature reported in `unit` ("F" or "C").
#[must_use]
pub fn temp_vibe(temperature: i32, unit: &str) -> TempVibe {
    match unit {
        "F" => match temperature {
            t if t < 32 => TempVibe::Freezing,
            t if t < 50 => TempVibe::Cold,
            t if t < 70 => TempVibe::Perfect,
            t if t < 80 => TempVibe::Warm,
            _ => TempVibe::Hot,
        },
        "C" => TempVibe::NeedsFahrenheit,
        _ => TempVibe::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(i32::MIN, "freezing")]
    #[case(-10, "freezing")]
    #[case(31, "freezing")]
    #[case(32, "cold")]
    #[case(49, "cold")]
    #[case(50, "perfect")]
    #[case(69, "perfect")]
    #[case(70, "warm")]
    #[case(79, "warm")]
    #[case(80, "hot")]
    #[case(i32::MAX, "hot")]
    fn test_fahrenheit_boundaries(#[case] temperature: i32, #[case] expected: &str) {
        assert_eq!(temp_vibe(temperature, "F").as_str(), expected);
    }

    #[rstest]
    #[case(-40)]
    #[case(0)]
    #[case(25)]
    #[case(100)]
    fn test_celsius_is_not_converted(#[case] temperature: i32) {
        assert_eq!(
            temp_vibe(temperature, "C").to_string(),
            "Convert to Fahrenheit for vibe"
        );
    }

    #[rstest]
    #[case("X")]
    #[case("K")]
    #[case("f")]
    #[case("")]
    fn test_other_units_are_unknown(#[case] unit: &str) {
        assert_eq!(temp_vibe(72, unit), TempVibe::Unknown);
        assert_eq!(temp_vibe(72, unit).as_str(), "unknown");
    }

    #[test]
    fn test_fahrenheit_always_one_of_five_labels() {
        let labels = ["freezing", "cold", "perfect", "warm", "hot"];
        for t in -60..=130 {
            assert!(labels.contains(&temp_vibe(t, "F").as_str()));
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&TempVibe::Perfect).unwrap();
        assert_eq!(json, "\"perfect\"");
    }
}
