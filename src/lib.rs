//! Compiler wrapper: rewrites the execution-root placeholder, inlines
//! `@file` response files, and runs the real compiler through a freshly
//! written response file.

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod rspfile;
pub mod spawn;
