//! # ppgis-core
//!
//! Core types, ID generation, and error types for PPGIS.
//!
//! This crate provides the foundational types shared across all PPGIS crates:
//! - Entity structs for observations and official points of interest
//! - Classification, view, basemap and issue-tag enums
//! - The five-dimension rating vector and its derived average
//! - Geographic coordinates and viewport bounds
//! - ID prefix constants and generation
//! - The seeded demo catalog
//! - Cross-cutting error types
//! - CLI response types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod geo;
pub mod ids;
pub mod ratings;
pub mod responses;
