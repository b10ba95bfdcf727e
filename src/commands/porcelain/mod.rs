pub mod add;
pub mod commit;
pub mod init;
