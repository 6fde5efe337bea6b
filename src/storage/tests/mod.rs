//! Unit tests for storage ports, adapters, and the codec.
