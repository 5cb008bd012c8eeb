pub mod backup;
pub mod clock;
pub mod config;
pub mod export;
pub mod log;
pub mod session_loop;
pub mod summary;
pub mod timer;
pub mod tracker;
