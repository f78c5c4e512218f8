//! Windows utility functions

pub mod string_conv;

pub use string_conv::wide_to_string;
