use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Named chart kinds accepted on the command line and in settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    #[serde(rename = "wbar")]
    WordBar,
    #[serde(rename = "hbar")]
    HorizontalBar,
    #[serde(rename = "hdot")]
    HorizontalDot,
    #[serde(rename = "vdot")]
    VerticalDot,
    Donut,
    #[serde(rename = "pmap")]
    ProportionalMap,
    #[serde(rename = "pgrid")]
    ProportionalGrid,
    Radial,
    /// Bars with a connecting line drawn over them.
    Line,
    /// Bars with a dot on each value.
    Scatter,
    /// Bars under a translucent filled area.
    #[serde(alias = "volume")]
    Area,
    Slope,
}

impl ChartKind {
    pub const ALL: [Self; 13] = [
        Self::Bar,
        Self::WordBar,
        Self::HorizontalBar,
        Self::HorizontalDot,
        Self::VerticalDot,
        Self::Donut,
        Self::ProportionalMap,
        Self::ProportionalGrid,
        Self::Radial,
        Self::Line,
        Self::Scatter,
        Self::Area,
        Self::Slope,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::WordBar => "wbar",
            Self::HorizontalBar => "hbar",
            Self::HorizontalDot => "hdot",
            Self::VerticalDot => "vdot",
            Self::Donut => "donut",
            Self::ProportionalMap => "pmap",
            Self::ProportionalGrid => "pgrid",
            Self::Radial => "radial",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Area => "area",
            Self::Slope => "slope",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == "volume" {
            return Ok(Self::Area);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ChartError::UnknownChartKind(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::ChartKind;
    use crate::error::ChartError;

    #[test]
    fn parses_every_display_name_back() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.as_str().parse::<ChartKind>().expect("kind"), kind);
        }
    }

    #[test]
    fn volume_is_an_alias_for_area() {
        assert_eq!("volume".parse::<ChartKind>().expect("kind"), ChartKind::Area);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "pie".parse::<ChartKind>().expect_err("unknown");
        assert!(matches!(err, ChartError::UnknownChartKind(name) if name == "pie"));
    }
}
