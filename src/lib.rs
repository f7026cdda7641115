//! Build-time configuration for the low cost rover.
//!
//! The values live in `cfg.toml` and are compiled into [`config::CONFIG`] by the
//! build script. Firmware components take the configuration as `&Config`.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod name;
pub mod speed;
pub mod token;

pub use config::{Config, CONFIG};
pub use name::DeviceName;
pub use speed::MaxSpeed;
pub use token::AuthToken;
