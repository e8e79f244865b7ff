pub mod cli;
pub mod config;
pub mod notify;
pub mod telemetry;
pub mod theme;

#[cfg(test)]
mod test_utils;
