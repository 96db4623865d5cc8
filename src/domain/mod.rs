//! Domain layer for Novel Writer
//!
//! This module contains the configuration model shared by the display and
//! infrastructure layers.

pub mod models;
