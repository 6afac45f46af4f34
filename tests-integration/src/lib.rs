//! Multi-contract tests for the web4 contracts live under `tests/`.
