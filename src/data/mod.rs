//! # Number types
//!
//! This module provides the exact base 60 number type, and the decimal type used to convert
//! between base 60 and base 10.

pub mod decimal;
pub mod sexagesimal;
