pub mod headers;
pub mod inspect;
pub mod patch;
pub mod rebuild;
