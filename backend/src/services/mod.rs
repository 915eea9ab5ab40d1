//! Service layer for business logic

pub mod bmi;

pub use bmi::BmiService;
