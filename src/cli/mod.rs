//! Terminal pages and the interactive dashboard

pub mod dashboard;
pub mod finances;
pub mod home;
pub mod market;
pub mod setup;
pub mod terms;
pub mod ui;
