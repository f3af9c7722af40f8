pub mod err;
pub mod http;
pub mod poll;
pub mod render;
pub mod status;
