//! Domain layer for the Projects domain

pub mod entities;
pub mod manifest;
pub mod ordering;
pub mod title;
