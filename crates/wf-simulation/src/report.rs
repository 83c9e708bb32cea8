use std::fmt;

use serde::Serialize;

use crate::config::CoordinateDomain;
use crate::field::WeedField;
use crate::weed::{Position, Rgb, WeedId};

/// Final state of one weed, as written in the shutdown report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    /// The weed's identifier.
    pub id: WeedId,
    /// Position at the moment the simulation stopped.
    pub position: Position,
    /// Display color, when the run tracks one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(skip)]
    domain: CoordinateDomain,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.domain {
            CoordinateDomain::Real => write!(
                f,
                "Weed ID: {}, Position: ({:.1}, {:.1})",
                self.id, self.position.x, self.position.y
            )?,
            CoordinateDomain::Integer => write!(
                f,
                "Weed ID: {}, Position: ({:.0}, {:.0})",
                self.id, self.position.x, self.position.y
            )?,
        }
        if let Some(color) = self.color {
            write!(f, ", Color: {color}")?;
        }
        Ok(())
    }
}

/// The summary emitted exactly once, when the simulation stops.
///
/// Lines are in ascending id order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShutdownReport {
    /// Tick count at the moment of stopping.
    pub ticks: u64,
    /// One entry per weed.
    pub weeds: Vec<ReportLine>,
}

impl ShutdownReport {
    /// Header printed before the per-weed lines.
    pub const HEADER: &'static str = "Simulation stopped. Final weed list:";

    /// Snapshot the field.
    pub fn from_field(field: &WeedField, domain: CoordinateDomain, ticks: u64) -> Self {
        // The field stores weeds in spawn order, which is ascending id order.
        let weeds = field
            .iter()
            .map(|w| ReportLine {
                id: w.id(),
                position: w.position(),
                color: w.color(),
                domain,
            })
            .collect();
        Self { ticks, weeds }
    }

    /// Number of weed lines.
    pub fn len(&self) -> usize {
        self.weeds.len()
    }

    /// Return `true` if no weed had spawned when the simulation stopped.
    pub fn is_empty(&self) -> bool {
        self.weeds.is_empty()
    }
}

impl fmt::Display for ShutdownReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::HEADER)?;
        for line in &self.weeds {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_header_only() {
        let report = ShutdownReport::from_field(&WeedField::new(), CoordinateDomain::Real, 0);
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "Simulation stopped. Final weed list:\n");
    }

    #[test]
    fn real_lines_use_one_decimal() {
        let mut field = WeedField::new();
        field.spawn(2.345, 0.2, 10.0, Some(Rgb(10, 20, 30)));
        field.spawn(0.0, 0.2, 10.0, None);
        let report = ShutdownReport::from_field(&field, CoordinateDomain::Real, 2);
        let text = report.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "Weed ID: 1, Position: (0.0, 2.3), Color: (10, 20, 30)"
        );
        assert_eq!(lines[2], "Weed ID: 2, Position: (0.0, 0.0)");
    }

    #[test]
    fn integer_lines_have_no_decimals() {
        let mut field = WeedField::new();
        field.spawn(7.0, 1.0, 90.0, None);
        let report = ShutdownReport::from_field(&field, CoordinateDomain::Integer, 1);
        assert_eq!(report.weeds[0].to_string(), "Weed ID: 1, Position: (0, 7)");
    }

    #[test]
    fn json_omits_missing_color() {
        let mut field = WeedField::new();
        field.spawn(1.0, 0.2, 10.0, None);
        let report = ShutdownReport::from_field(&field, CoordinateDomain::Real, 4);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ticks"], 4);
        assert_eq!(json["weeds"][0]["id"], 1);
        assert!(json["weeds"][0].get("color").is_none());
        assert_eq!(json["weeds"][0]["position"]["y"], 1.0);
    }
}
