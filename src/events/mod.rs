pub mod keyboard;
pub mod pointer;

pub use pointer::{wire_scroll, wire_viewport};
