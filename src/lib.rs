//! Breezeway Admin - HVAC Service Management Backend
//!
//! This crate implements the admin dashboard backend: discount codes,
//! document tags, email notification settings, the security event log, and
//! equipment field extraction.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
