//! Integration tests for the entropy engine and its collaborators.

mod batch;
mod end_to_end;
mod properties;
