//! # Contacts Manager Library
//!
//! A contacts manager: persons with optional country, gender, birth date and
//! newsletter preference, plus a reference list of countries.
//!
//! - RESTful HTTP API endpoints
//! - Free-text search, multi-field sorting, CSV/xlsx export
//! - Bulk country import from xlsx workbooks
//! - PostgreSQL or in-memory storage behind one repository interface
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities, search criteria and repository traits
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: Database, repositories, spreadsheets and metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! contacts_manager/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities, value objects, and traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Storage, spreadsheet and metrics implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
