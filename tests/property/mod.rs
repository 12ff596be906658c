//! Property-based tests for the tfctl router

mod routing;
