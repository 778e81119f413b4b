//! Citizen report feature.
//!
//! Reports are submitted from the Alertic frontend form, validated for field
//! presence, and persisted as a single row. Records are never updated or
//! deleted by this service.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/test` | No | Submit a report |
//! | GET | `/api/get_reports` | No | List reports, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
