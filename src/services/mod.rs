pub mod completion;
pub mod relay;
