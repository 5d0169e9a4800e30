#![cfg(test)]

pub mod common;
pub mod startup_tests;
