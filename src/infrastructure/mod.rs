//! Infrastructure Layer
//!
//! Contains implementations for external concerns including:
//! - Database pool, migrations and seeding (PostgreSQL)
//! - Repository implementations (PostgreSQL and in-memory)
//! - Spreadsheet import/export
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
pub mod spreadsheet;
