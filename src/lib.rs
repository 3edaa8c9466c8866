//! A minimal advert board service: user accounts and classified adverts over
//! a relational store, with one database transaction owning each request.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod repo;
pub mod router;
pub mod schemas;
pub mod unit;

mod openapi_tests;
mod test_utils;
