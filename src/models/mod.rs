pub mod daily_total;
pub mod duration;
pub mod phase;
pub mod session;
