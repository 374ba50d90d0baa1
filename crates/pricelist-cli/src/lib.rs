//! Library components of the `pricelist` command-line tool.

pub mod export;
pub mod listing;
pub mod logging;
pub mod session;
