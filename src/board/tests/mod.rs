//! Unit tests for the board module.
//!
//! Tests are organised by layer: domain parsing and validation, board
//! partition and splice semantics, store orchestration against a mocked
//! gateway, drop-event filtering, and wire-format fidelity.
