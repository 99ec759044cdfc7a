//! Tree Match - Branching Questionnaire Service
//!
//! This crate serves a quiz whose questions form a directed decision graph:
//! each answer routes the client to the next step until a terminal match.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
