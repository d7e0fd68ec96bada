pub mod build;
pub mod describe;
pub mod serve;
pub mod warnings;
pub mod watch;
