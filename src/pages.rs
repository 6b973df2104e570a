//! Page generation modules
//!
//! This module organizes HTML page generators. Each page module handles its
//! specific view logic and utilizes shared components from the components
//! module.

pub mod preview;
