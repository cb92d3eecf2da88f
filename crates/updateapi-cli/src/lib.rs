//! Orchestration for the `updateapi` binary.
//!
//! The pipeline runs in a fixed order: DTO scan, API scan, the five
//! generators, artifact writes, then each target's formatter. All semantic
//! validation lives in the scanners; the orchestrator only sequences the
//! steps and keeps independent artifacts independent (a broken gateway file
//! must not stop DTO generation).

pub mod config;
pub mod pipeline;
pub mod report;
