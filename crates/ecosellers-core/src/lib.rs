#[macro_use]
extern crate log;

pub mod auth;
pub mod certification;
pub mod config;
pub mod error;
pub mod form;
pub mod mock;
pub mod notice;
pub mod promo;
pub mod route;
pub mod session;

