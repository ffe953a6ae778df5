pub mod code;
pub mod response;
