//! Custom extractors whose rejections are `AppError`s.

mod resource_id;
mod validated_json;

pub use resource_id::ResourceId;
pub use validated_json::ValidatedJson;
