//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod capture;
pub mod catalog;
pub mod dialog;
pub mod form;
pub mod staging;
pub mod submission;
