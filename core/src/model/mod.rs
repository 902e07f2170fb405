pub mod catalog;
pub mod contest;
pub mod contest_log;
pub mod domain;
pub mod ranking;
