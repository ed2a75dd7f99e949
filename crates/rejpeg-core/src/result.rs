use crate::error::RejpegError;

pub type Result<T> = std::result::Result<T, RejpegError>;
