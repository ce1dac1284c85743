pub mod bench;
pub mod config;
pub mod runner;
pub mod sample;
pub mod util;
