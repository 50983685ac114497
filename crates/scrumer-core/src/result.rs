use crate::error::ScrumerError;

pub type ScrumerResult<T> = Result<T, ScrumerError>;
