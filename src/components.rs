//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across page
//! generation. Components handle the document shell with consistent
//! styling and behavior.

pub mod layout;
