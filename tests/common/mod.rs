#![allow(dead_code)]

pub mod mem_source;
pub mod synthetic_image;
