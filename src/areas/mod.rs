//! Core repository components
//!
//! - `database`: read-only loose object database
//! - `refs`: reference resolution (HEAD and named refs)
//! - `repository`: repository facade and discovery

pub mod database;
pub mod refs;
pub mod repository;
