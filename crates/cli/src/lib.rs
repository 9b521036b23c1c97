//! Grader for the Docker zero-to-hero workshop.
//!
//! Inspects a learner's project tree (Dockerfile, compose manifest, package
//! metadata, static HTML) and optionally a local container engine, then
//! scores the result against the workshop rubric.
//!
//! The pieces, leaf first:
//! - [`artifact`]: reads project files, treating absence as empty text
//! - [`engine`]: bounded, normalized calls into the container engine CLI
//! - [`check`]: check definitions, results, and the registry value
//! - [`checks`]: the workshop rubric itself
//! - [`runner`]: runs a (filtered) registry into a [`report::Report`]
//! - [`report`]: console and JSON renderers

pub mod artifact;
pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod runner;

#[cfg(test)]
pub mod test_utils;
