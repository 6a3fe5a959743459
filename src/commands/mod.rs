pub mod analyze;
pub mod budget;
pub mod init;
pub mod roas;
pub mod views;
