// Snapshot - the transformed result of one successful poll
use crate::domain::chart::{ChartKind, ChartSeries};
use crate::domain::reading::Reading;
use chrono::{DateTime, Local};

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub readings: Vec<Reading>,
    /// 24-hour time of day per reading, shared by every chart as x labels.
    pub time_labels: Vec<String>,
    pub date_labels: Vec<String>,
    /// One series per [`ChartKind::ALL`] entry, same order.
    pub series: Vec<ChartSeries>,
    pub fetched_at: DateTime<Local>,
}

impl Snapshot {
    pub fn from_readings(readings: Vec<Reading>, fetched_at: DateTime<Local>) -> Self {
        let time_labels = readings
            .iter()
            .map(|r| r.timestamp.format(TIME_FORMAT).to_string())
            .collect();
        let date_labels = readings
            .iter()
            .map(|r| r.timestamp.format(DATE_FORMAT).to_string())
            .collect();
        let series = ChartKind::ALL
            .iter()
            .map(|&kind| ChartSeries::project(kind, &readings))
            .collect();

        Self {
            readings,
            time_labels,
            date_labels,
            series,
            fetched_at,
        }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn series_at(&self, chart_index: usize) -> Option<&ChartSeries> {
        self.series.get(chart_index)
    }

    pub fn latest_date(&self) -> Option<&str> {
        self.date_labels.last().map(String::as_str)
    }
}
