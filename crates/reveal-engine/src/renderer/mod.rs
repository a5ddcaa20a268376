pub mod recording;
pub mod traits;

// Re-export key types for convenient access
pub use recording::{DrawCommand, RecordingSurface};
pub use traits::{
    ColorStop, FontSpec, Hsla, LinearGradient, Rgba, Surface,
    TITLE_FONT_FAMILY, TITLE_FONT_WEIGHT,
};
