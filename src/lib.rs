pub mod bisect;
pub mod config;
pub mod keys;
pub mod song;
pub mod time;
