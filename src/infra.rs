//! Infrastructure services: process execution with captured output streams.

pub mod exec;
