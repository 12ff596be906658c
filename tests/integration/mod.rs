//! Integration tests for the tfctl client

mod cli_binary;
mod config_integration;
mod routing_table;
mod validation;
