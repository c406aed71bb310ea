//! Test Module
//!
//! Cross-module test suite for the AgroVoice brain.
//!
//! ## Test Categories
//! - `brain_tests`: Language detection, category routing, catalogs, formatting
//! - `source_tests`: Record source seam and JSON data file loading
