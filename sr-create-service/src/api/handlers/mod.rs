//! HTTP handlers, one module per resource
//!
//! Handlers only extract request data and pick the backend operation; the
//! shared validation and outcome mapping live in [`super::dispatch`].

pub mod accounts;
pub mod addresses;
pub mod cmdb;
pub mod csis;
pub mod handling_instructions;
pub mod service_requests;
pub mod templates;
