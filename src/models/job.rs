use chrono::{
    SecondsFormat, Utc
};
use mongodb::bson::{
    self,
    Document,
};
use serde::{
    Serialize, Deserialize
};

use crate::error::ModelError;
use crate::models::base::BaseDocument;
use crate::models::{
    COMPILER_VERSION_KEY, CROSS_COMPILE_KEY,
    GIT_BRANCH_KEY, GIT_COMMIT_KEY, GIT_DESCRIBE_KEY, GIT_URL_KEY,
    ID_KEY, JOB_KEY, KERNEL_KEY, METADATA_KEY,
    PRIVATE_KEY, STATUS_KEY, UPDATED_KEY,
};

pub const JOB_COLLECTION: &str = "job";

// metadata keys the build pipeline is known to fill in
pub const METADATA_KEYS: [&str; 6] = [
    CROSS_COMPILE_KEY, COMPILER_VERSION_KEY,
    GIT_URL_KEY, GIT_BRANCH_KEY, GIT_DESCRIBE_KEY, GIT_COMMIT_KEY,
];

/// One job as seen on the file system.
///
/// Each job on the file system is composed of a real job name(usually who
/// triggered the build) and a kernel directory. A job document is the
/// combination of the two, and its `_id` is of the form `job-kernel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDocument {
    // `_id` seed, fixed once set; mutating `job` or `kernel` afterwards
    // does not re-derive it
    #[serde(rename = "_id")]
    name: String,

    #[serde(default)]
    pub private: bool,

    // the real job name as found on the file system
    #[serde(default)]
    pub job: Option<String>,

    // the real kernel directory name as found on the file system
    #[serde(default)]
    pub kernel: Option<String>,

    // last update instant, ISO-8601 UTC text; never parsed back
    #[serde(default)]
    pub updated: Option<String>,

    // build status; values are not checked here
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub metadata: Document,

    // keys we do not model, kept so foreign documents round-trip intact
    #[serde(flatten)]
    pub extra: Document,
}

impl JobDocument {
    pub fn new(name: &str, job: Option<String>, kernel: Option<String>) -> Self {
        JobDocument {
            name: name.to_string(),
            private: false,
            job: job,
            kernel: kernel,
            updated: None,
            status: None,
            metadata: Document::new(),
            extra: Document::new(),
        }
    }

    /// Build a document whose `_id` is derived from the job and kernel names.
    pub fn from_parts(job: &str, kernel: &str) -> Self {
        let name = format!("{job}-{kernel}");
        JobDocument::new(&name, Some(job.to_string()), Some(kernel.to_string()))
    }

    /// Stamp `updated` with the current UTC time.
    pub fn touch(&mut self) {
        self.updated = Some(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
        );
    }

    /// Rebuild a document from its stored mapping.
    ///
    /// Keys with no corresponding field land in `extra`; a missing `_id`
    /// is an error.
    pub fn from_document(doc: Document) -> Result<JobDocument, ModelError> {
        if false == doc.contains_key(ID_KEY) {
            return Err(ModelError::MissingIdentity);
        }
        Ok(bson::from_document(doc)?)
    }

    /// Build a document from extended JSON text.
    pub fn from_json(text: &str) -> Result<JobDocument, ModelError> {
        let doc: Document = serde_json::from_str(text)?;
        JobDocument::from_document(doc)
    }
}

impl BaseDocument for JobDocument {
    fn collection(&self) -> &'static str {
        JOB_COLLECTION
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_document(&self) -> Document {
        let mut job_doc = self.base_document();
        job_doc.insert(PRIVATE_KEY, self.private);
        job_doc.insert(JOB_KEY, self.job.clone());
        job_doc.insert(KERNEL_KEY, self.kernel.clone());
        job_doc.insert(UPDATED_KEY, self.updated.clone());
        job_doc.insert(STATUS_KEY, self.status.clone());
        job_doc.insert(METADATA_KEY, self.metadata.clone());
        for (key, value) in &self.extra {
            job_doc.insert(key.as_str(), value.clone());
        }
        job_doc
    }
}
