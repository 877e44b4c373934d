pub mod config;
pub mod domain;
pub mod handler;
pub mod routes;
pub mod run;
pub mod startup;
pub mod telemetry;
pub mod topic;
pub mod utils;
