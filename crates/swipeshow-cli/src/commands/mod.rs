pub mod config;
pub mod effects;
pub mod run;
