//! tfctl: address remote resources by path.
//!
//! The argument router rewrites terse resource addresses such as
//! `acme prod run-123 apply` into canonical `<noun> <verb> -flag=value`
//! invocations, using a command registry built from the command catalog.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod registry;
pub mod router;
pub mod validation;
