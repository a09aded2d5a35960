//! Unit tests for configuration loading and precedence.
//!
//! - `precedence`: Layer precedence and loading tests
//! - `resolution`: Bind address and seed path resolution tests
