//! Core domain types shared by storage and authorization

pub mod models;
