// Chart series derived from readings
use crate::domain::reading::Reading;

pub const CHART_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Co2,
    Temperature,
    Pm25,
    Humidity,
}

impl ChartKind {
    /// Canonical chart order; a chart's index here is what the panel order permutes.
    pub const ALL: [ChartKind; CHART_COUNT] = [
        ChartKind::Co2,
        ChartKind::Temperature,
        ChartKind::Pm25,
        ChartKind::Humidity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Co2 => "CO2",
            ChartKind::Temperature => "Temperature",
            ChartKind::Pm25 => "PM2.5",
            ChartKind::Humidity => "Humidity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ChartKind::Co2 => "ppm",
            ChartKind::Temperature => "°C",
            ChartKind::Pm25 => "µg/m³",
            ChartKind::Humidity => "%",
        }
    }

    fn value_of(self, reading: &Reading) -> f64 {
        match self {
            ChartKind::Co2 => reading.co2,
            ChartKind::Temperature => reading.temp,
            ChartKind::Pm25 => reading.pm25,
            ChartKind::Humidity => reading.humid,
        }
    }

    /// `415 ppm`, `21.5°C`, `12 µg/m³`, `40%`
    pub fn format_value(self, value: f64) -> String {
        match self {
            ChartKind::Temperature | ChartKind::Humidity => format!("{}{}", value, self.unit()),
            ChartKind::Co2 | ChartKind::Pm25 => format!("{} {}", value, self.unit()),
        }
    }

    /// Display label carrying the most recent value, or `no data` for an empty series.
    pub fn label(self, latest: Option<f64>) -> String {
        match latest {
            Some(value) => format!("{} level - {}", self.name(), self.format_value(value)),
            None => format!("{} level - no data", self.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub label: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Project one field across all readings, keeping their order.
    pub fn project(kind: ChartKind, readings: &[Reading]) -> Self {
        let values: Vec<f64> = readings.iter().map(|r| kind.value_of(r)).collect();
        let label = kind.label(values.last().copied());
        Self {
            kind,
            label,
            values,
        }
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn bounds(&self) -> Option<(f64, f64)> {
        bounds(&self.values)
    }
}

/// Min and max of `values`, `None` when empty.
pub fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn reading(co2: f64, pm25: f64, temp: f64, humid: f64) -> Reading {
        let ts = Local.timestamp_millis_opt(1_709_287_200_000).unwrap();
        Reading::new(ts, co2, pm25, temp, humid)
    }

    #[test]
    fn test_labels_embed_latest_value() {
        let readings = vec![reading(400.0, 8.0, 20.0, 39.0), reading(415.0, 12.0, 21.5, 40.0)];

        let labels: Vec<String> = ChartKind::ALL
            .iter()
            .map(|&kind| ChartSeries::project(kind, &readings).label)
            .collect();

        assert_eq!(
            labels,
            vec![
                "CO2 level - 415 ppm",
                "Temperature level - 21.5°C",
                "PM2.5 level - 12 µg/m³",
                "Humidity level - 40%",
            ]
        );
    }

    #[test]
    fn test_projection_keeps_order_and_length() {
        let readings = vec![
            reading(1.0, 2.0, 3.0, 4.0),
            reading(5.0, 6.0, 7.0, 8.0),
            reading(9.0, 10.0, 11.0, 12.0),
        ];
        let pm25 = ChartSeries::project(ChartKind::Pm25, &readings);
        assert_eq!(pm25.values, vec![2.0, 6.0, 10.0]);
        assert_eq!(pm25.latest(), Some(10.0));
        assert_eq!(pm25.bounds(), Some((2.0, 10.0)));
    }

    #[test]
    fn test_empty_series_reads_no_data() {
        let series = ChartSeries::project(ChartKind::Humidity, &[]);
        assert!(series.is_empty());
        assert_eq!(series.label, "Humidity level - no data");
        assert_eq!(series.bounds(), None);
    }
}
