//! Use-Cases der Application-Layer-Orchestrierung.

pub mod capture;
pub mod catalog;
pub mod staging;
pub mod submission;
