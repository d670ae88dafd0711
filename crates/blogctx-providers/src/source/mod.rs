//! Blog CMS listing adapters

pub mod wordpress;

pub use wordpress::WordPressSource;
