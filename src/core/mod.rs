pub mod backup;
pub mod checkin;
pub mod classify;
pub mod insert;
pub mod locate;
pub mod log;
pub mod resolve;
pub mod seed;
pub mod show;
