//! Map lighting and weather codes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightMode {
    Indoors,
    Dark,
    Glitch,
    Outdoors,
    Shadowed,
    Unknown(i32),
}

impl LightMode {
    /// Codes 0 and 1 both render as indoor lighting.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 | 1 => Self::Indoors,
            2 => Self::Dark,
            3 => Self::Glitch,
            4 => Self::Outdoors,
            5 => Self::Shadowed,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for LightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indoors => f.write_str("Indoors"),
            Self::Dark => f.write_str("Dark"),
            Self::Glitch => f.write_str("Glitch"),
            Self::Outdoors => f.write_str("Outdoors"),
            Self::Shadowed => f.write_str("Shadowed"),
            Self::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherType {
    Normal,
    Freezing,
    Underwater,
    LightSnow,
    HeavySnow,
    Unknown(i32),
}

impl WeatherType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Normal,
            4 => Self::Freezing,
            5 => Self::Underwater,
            7 => Self::LightSnow,
            8 => Self::HeavySnow,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Normal"),
            Self::Freezing => f.write_str("Freezing"),
            Self::Underwater => f.write_str("Underwater"),
            Self::LightSnow => f.write_str("Light Snow"),
            Self::HeavySnow => f.write_str("Heavy Snow"),
            Self::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_are_both_indoors() {
        assert_eq!(LightMode::from_code(0), LightMode::Indoors);
        assert_eq!(LightMode::from_code(1), LightMode::Indoors);
        assert_eq!(LightMode::from_code(9).to_string(), "Unknown (9)");
    }

    #[test]
    fn weather_labels() {
        assert_eq!(WeatherType::from_code(7).to_string(), "Light Snow");
        assert_eq!(WeatherType::from_code(1), WeatherType::Unknown(1));
    }
}
