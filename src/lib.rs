pub mod detection;
pub mod models;
pub mod output;
pub mod pipeline;

pub use detection::{SheetSplitter, SplitConfig, build_standard_pipeline};
pub use models::{Contour, GlyphCrop, GlyphSlot};
pub use pipeline::{
    BoundingBox, DebugConfig, MetadataValue, Pipeline, PipelineContext, PipelineData, PipelineStep,
};
