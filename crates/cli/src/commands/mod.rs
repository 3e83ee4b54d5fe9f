pub mod init;
pub mod modes;
pub mod run;
