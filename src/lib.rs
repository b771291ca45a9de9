//! Workspace-level integration tests for ChemLab; see `tests/`.
