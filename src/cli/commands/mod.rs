pub mod approve;
pub mod audit;
pub mod checkin;
pub mod config;
pub mod db;
pub mod duty;
pub mod export;
pub mod init;
pub mod leave;
pub mod mark;
pub mod report;
pub mod strike;
pub mod user;
