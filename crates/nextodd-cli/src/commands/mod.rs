pub mod batch;
pub mod compute;
pub mod config;
pub mod demo;

pub use batch::run_batch;
pub use compute::run_compute;
pub use demo::run_demo;
