//! Edge case tests for minicc-par
