//! Integration tests for nebula-schema-validator.

mod contract;
mod json_options;
mod properties;
mod registry;
