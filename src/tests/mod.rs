//! Behavioral tests for the authd console
//!
//! This module provides BDD-style tests using given-when-then naming
//! convention. Tests focus on observable behavior rather than
//! implementation details.

pub mod navigation_behaviors;
