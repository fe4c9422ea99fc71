pub mod cli;
pub mod config;
pub mod quiz;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod test_utils;
