//! City Designer Library
//!
//! A procedural city layout generator that can run headless or with a Bevy UI.

pub mod city;

#[cfg(feature = "ui")]
pub mod ui;
