pub mod annotate;
pub mod due;
pub mod status;
pub mod timer;
pub mod week;
