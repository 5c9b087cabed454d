use mongodb::bson::Document;

use super::ID_KEY;

// the contract every persisted model fulfills: one mongodb collection per
// model, and a flat bson document as the stored shape

pub trait BaseDocument {
    /// The logical collection this model belongs to.
    fn collection(&self) -> &'static str;

    /// The raw seed of the `_id` key. Fixed once the model is constructed.
    fn name(&self) -> &str;

    /// The base mapping every model starts from.
    fn base_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert(ID_KEY, self.name());
        doc
    }

    /// The full mapping, ready for the db or the wire.
    fn to_document(&self) -> Document;
}
