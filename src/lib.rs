//! Sends GitHub workflow, issue and release notifications to a Google Chat space.

pub mod cards;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod notify;
pub mod webhook;
