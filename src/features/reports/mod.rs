//! Citizen issue reports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reports` | List all reports, newest first |
//! | POST | `/api/reports` | Submit a report |
//! | PATCH | `/api/reports/{id}` | Update status, department or review |
//! | DELETE | `/api/reports/{id}` | Delete a report |
//! | GET | `/uploads/{file}` | Stored report photos |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
