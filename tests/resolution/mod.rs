//! Settings resolution end to end.

mod env_file_tests;
mod resolver_tests;
