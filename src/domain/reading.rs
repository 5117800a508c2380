// Reading domain model and response validation
use crate::domain::error::DashboardError;
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One air-quality sample as served by `/api/latest-air-quality/`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: DateTime<Local>,
    pub co2: f64,
    pub pm25: f64,
    pub temp: f64,
    pub humid: f64,
}

impl Reading {
    pub fn new(timestamp: DateTime<Local>, co2: f64, pm25: f64, temp: f64, humid: f64) -> Self {
        Self {
            timestamp,
            co2,
            pm25,
            temp,
            humid,
        }
    }

    /// Validate one element of the response body.
    /// `index` is only used to point at the offending reading in errors.
    pub fn from_json(index: usize, value: &Value) -> Result<Self, DashboardError> {
        let object = value.as_object().ok_or_else(|| {
            DashboardError::MalformedResponse(format!("reading {} is not an object", index))
        })?;

        let raw_timestamp = object.get("timestamp").ok_or_else(|| missing(index, "timestamp"))?;
        let timestamp = parse_timestamp(raw_timestamp).ok_or_else(|| {
            DashboardError::MalformedResponse(format!(
                "reading {}: unparseable timestamp {}",
                index, raw_timestamp
            ))
        })?;

        let number = |field: &'static str| -> Result<f64, DashboardError> {
            let raw = object.get(field).ok_or_else(|| missing(index, field))?;
            raw.as_f64().ok_or_else(|| {
                DashboardError::MalformedResponse(format!(
                    "reading {}: field `{}` is not a number",
                    index, field
                ))
            })
        };

        Ok(Self::new(
            timestamp,
            number("co2")?,
            number("pm25")?,
            number("temp")?,
            number("humid")?,
        ))
    }
}

fn missing(index: usize, field: &str) -> DashboardError {
    DashboardError::MalformedResponse(format!("reading {}: missing field `{}`", index, field))
}

/// Turn a response body into readings, in server order.
///
/// Arrays are read element by element; objects are read as their values in
/// document order. Anything else is rejected outright.
pub fn parse_readings(body: &Value) -> Result<Vec<Reading>, DashboardError> {
    let items: Vec<&Value> = match body {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => {
            return Err(DashboardError::MalformedResponse(
                "Data is not a valid JSON object".to_string(),
            ));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Reading::from_json(index, item))
        .collect()
}

/// Accepts RFC 3339 strings, offset-less ISO date-times and bare dates (taken
/// as local time, dates at midnight) and milliseconds since the Unix epoch.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Local>> {
    match value {
        Value::String(s) => {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
                return Some(parsed.with_timezone(&Local));
            }
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(s, DATE_FORMAT)
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
                .map(|naive| resolve_local(Local.from_local_datetime(&naive), &naive))
        }
        Value::Number(n) => {
            let ms = match n.as_i64() {
                Some(ms) => ms,
                None => {
                    let ms = n.as_f64().filter(|ms| ms.is_finite())?.trunc();
                    if ms < i64::MIN as f64 || ms > i64::MAX as f64 {
                        return None;
                    }
                    ms as i64
                }
            };
            Local.timestamp_millis_opt(ms).single()
        }
        _ => None,
    }
}

/// Ambiguous local times take the earlier instant; times skipped by a DST
/// jump are read as UTC.
fn resolve_local(result: LocalResult<DateTime<Local>>, naive: &NaiveDateTime) -> DateTime<Local> {
    match result {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => Local.from_utc_datetime(naive),
    }
}
