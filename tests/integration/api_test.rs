//! API endpoint integration tests
//!
//! Drives the composed application against temporary content roots.

#![allow(dead_code)]

mod catalog;
mod common;
mod projects;
