//! Tests for the MHF instruction set.
