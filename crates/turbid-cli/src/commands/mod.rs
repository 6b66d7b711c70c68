pub mod batch;
pub mod config;
pub mod psnr;
pub mod restore;
pub mod spectrum;
