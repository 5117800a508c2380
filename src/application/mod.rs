// Application layer - Fetch-and-transform use case and the polling task
pub mod poller;
pub mod telemetry_service;
pub mod telemetry_source;

#[cfg(test)]
pub(crate) mod testing;
