pub mod item_id;
pub mod validated_json;

pub use item_id::ItemId;
pub use validated_json::ValidatedJson;
