pub mod batch;
pub mod convert;
pub mod evaluate;
pub mod generate;
pub mod solve;
