#![allow(dead_code)]

pub mod catalog;
pub mod config;
pub mod server;
