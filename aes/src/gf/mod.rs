pub mod arithmetic;
pub mod tables;
