// Scripted telemetry source for unit tests
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::error::DashboardError;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Replays queued responses, then keeps returning the last one.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Value, DashboardError>>>,
    last: Mutex<Result<Value, DashboardError>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn repeating(response: Result<Value, DashboardError>) -> Self {
        Self::new(vec![response])
    }

    pub fn new(responses: Vec<Result<Value, DashboardError>>) -> Self {
        let mut script: VecDeque<_> = responses.into();
        let last = script
            .pop_back()
            .unwrap_or_else(|| Ok(json!([])));
        Self {
            script: Mutex::new(script),
            last: Mutex::new(last),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TelemetrySource for ScriptedSource {
    async fn fetch_latest(&self) -> Result<Value, DashboardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(response) => response,
            None => self.last.lock().unwrap().clone(),
        }
    }
}

/// `count` readings five minutes apart with steadily rising values.
pub fn sample_body(count: usize) -> Value {
    let readings: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "timestamp": 1_709_287_200_000i64 + (i as i64) * 300_000,
                "co2": 400 + i * 5,
                "pm25": 8.0 + i as f64 * 0.5,
                "temp": 20.0 + i as f64 * 0.25,
                "humid": 40 + i,
            })
        })
        .collect();
    Value::Array(readings)
}
