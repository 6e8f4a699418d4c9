pub mod cors;
pub mod storage;
