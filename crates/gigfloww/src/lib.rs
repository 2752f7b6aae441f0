pub mod config;
pub mod error;
pub mod signup;
pub mod telemetry;
