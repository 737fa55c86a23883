//! Error types for composing a ducky

use thiserror::Error;

use crate::assets::Accessory;

/// A generation precondition was violated. No image is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// An accessory was rolled but its pool has no sprites
    #[error("A {accessory} was rolled but the {accessory} pool is empty")]
    EmptyPool { accessory: Accessory },
    /// Layer dimensions don't match the canvas
    #[error("Layer '{layer}' is {size_w}x{size_h}, expected {canvas_w}x{canvas_h}", size_w = size.0, size_h = size.1, canvas_w = expected.0, canvas_h = expected.1)]
    SizeMismatch { layer: String, size: (u32, u32), expected: (u32, u32) },
}
