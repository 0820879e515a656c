//! JSON configuration files consumed by the binaries.

pub mod bench;
pub mod descriptor_demo;
