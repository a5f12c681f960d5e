// Shared test doubles and cross-module flow tests.

pub mod support;
