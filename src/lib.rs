#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod assets;
pub mod config;
pub mod geometry;
pub mod scenes;
pub mod skill_tree;
pub mod ui;
