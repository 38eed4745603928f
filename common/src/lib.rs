// browser-independent state for the portfolio page
//
// everything here is plain data plus the operations the page performs on it,
// so the webapp only has to measure the dom and render what these return
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod details;
pub mod footer;
pub mod nav;
pub mod reveal;
pub mod skills;
pub mod video;
