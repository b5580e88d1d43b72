#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod bill;
pub mod estimator;
pub mod feed;
pub mod prelude;
pub mod projection;
pub mod quantity;
pub mod tables;
pub mod tariff;
pub mod weekly;
