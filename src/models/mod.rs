// src/models/mod.rs

pub mod choice;
pub mod question;
