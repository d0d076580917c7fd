//! Edge case tests for minicc-lex
