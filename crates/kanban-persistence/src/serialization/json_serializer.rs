use crate::traits::Serializer;
use kanban_core::{KanbanError, KanbanResult};

/// Pretty-printing JSON serializer used for the on-disk envelope.
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| KanbanError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T> {
        serde_json::from_slice(bytes).map_err(|e| KanbanError::Serialization(e.to_string()))
    }
}
