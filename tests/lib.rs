//! Cross-crate integration tests live alongside this (empty) library target.
