use log::warn;
use mongodb::bson::{
    Bson, Document
};
use serde::Deserialize;

use crate::models::job::{
    JobDocument, METADATA_KEYS
};

// job definition as read in(e.g. from disk)
#[derive(Debug, Deserialize)]
pub struct Definition {
    // the tree/job that triggered the build
    pub job: String,

    // kernel directory name
    pub kernel: String,

    pub private: Option<bool>,

    pub status: Option<String>,

    // free-form build metadata
    pub metadata: Option<toml::Table>,
}

impl Definition {
    pub fn into_document(self) -> JobDocument {
        let mut job_doc = JobDocument::from_parts(&self.job, &self.kernel);
        job_doc.private = self.private.unwrap_or(false);
        job_doc.status = self.status;
        if let Some(metadata) = self.metadata {
            for (key, value) in metadata {
                if false == METADATA_KEYS.contains(&key.as_str()) {
                    warn!("Unrecognized metadata key `{key}`, keeping it anyway.");
                }
                job_doc.metadata.insert(key, toml_to_bson(value));
            }
        }
        job_doc
    }
}

fn toml_to_bson(value: toml::Value) -> Bson {
    match value {
        toml::Value::String(s) => Bson::String(s),
        toml::Value::Integer(i) => Bson::Int64(i),
        toml::Value::Float(f) => Bson::Double(f),
        toml::Value::Boolean(b) => Bson::Boolean(b),
        toml::Value::Datetime(dt) => Bson::String(dt.to_string()),
        toml::Value::Array(items) => Bson::Array(
            items.into_iter().map(toml_to_bson).collect()
        ),
        toml::Value::Table(table) => {
            let mut doc = Document::new();
            for (key, value) in table {
                doc.insert(key, toml_to_bson(value));
            }
            Bson::Document(doc)
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::models::base::BaseDocument;

    use super::*;

    #[test]
    fn definition_files_turn_into_documents() {
        let definition: Definition = toml::from_str(r#"
            job = "next"
            kernel = "next-20140731"
            status = "BUILD"

            [metadata]
            git_branch = "master"
            git_commit = "abc123"
        "#).unwrap();

        let job_doc = definition.into_document();
        assert_eq!(job_doc.name(), "next-next-20140731");
        assert_eq!(job_doc.status.as_deref(), Some("BUILD"));
        assert_eq!(job_doc.private, false);
        assert_eq!(job_doc.metadata.get_str("git_branch").unwrap(), "master");
        assert_eq!(job_doc.metadata.get_str("git_commit").unwrap(), "abc123");
    }

    #[test]
    fn unrecognized_metadata_keys_are_kept() {
        let definition: Definition = toml::from_str(r#"
            job = "mainline"
            kernel = "v3.16-rc7"

            [metadata]
            build_counter = 3
        "#).unwrap();

        let job_doc = definition.into_document();
        assert_eq!(job_doc.metadata.get_i64("build_counter").unwrap(), 3);
    }
}
