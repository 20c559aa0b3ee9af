pub mod app;
pub mod config;
pub mod drift;
pub mod ease;
pub mod rig;
pub mod target;
pub mod tour;
