#![no_std]

extern crate alloc;

pub use board::*;
pub use clue::*;
pub use controller::*;
pub use error::*;
pub use render::*;
pub use round::*;
pub use sample::*;
pub use source::*;
pub use types::*;

mod board;
mod clue;
mod controller;
mod error;
mod render;
mod round;
mod sample;
mod source;
mod types;
