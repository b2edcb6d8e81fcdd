mod image_policy;

pub use image_policy::{ImagePolicy, ImageRejection};
