#[macro_use]
mod macros;

pub mod float_ext;
