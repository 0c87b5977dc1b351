//! Feature implementations for task-intent.
//!
//! - Natural language intent extraction
//! - Shell integration

pub mod nlp;
pub mod shell;
