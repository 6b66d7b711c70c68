pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod pipeline;
pub mod quality;
pub mod render;
pub mod restore;
pub mod spectrum;
