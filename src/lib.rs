//! Ranks location-tagged support organizations nearest-first from an observer location.

pub mod app_config;
pub mod directory;
pub mod domain;
mod geo_point_deserializer;
pub mod location_input;
pub mod proximity;
pub mod resource_loader;
