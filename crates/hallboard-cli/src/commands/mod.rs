pub mod config;
pub mod hijri;
pub mod meetings;
pub mod run;
