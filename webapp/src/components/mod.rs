pub mod carousel;
pub mod lightbox;
pub mod reveal;
