pub mod dom;
pub mod scroll;
pub mod style;
