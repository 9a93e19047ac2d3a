pub mod replay;

pub use replay::ReplaySource;
