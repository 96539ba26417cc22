//! Request-intercepting admission checks.
//!
//! Both middlewares run fully before the downstream handler and terminate
//! the request with a bare status code on rejection.

pub mod auth;
pub mod rate_limit;
