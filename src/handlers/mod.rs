// src/handlers/mod.rs

pub mod polls;
pub mod questions;
