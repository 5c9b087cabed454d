pub mod base;
pub mod job;

// well-known document keys, exactly as stored

pub const ID_KEY: &str = "_id";
pub const JOB_KEY: &str = "job";
pub const KERNEL_KEY: &str = "kernel";
pub const PRIVATE_KEY: &str = "private";
pub const STATUS_KEY: &str = "status";
pub const UPDATED_KEY: &str = "updated";
pub const METADATA_KEY: &str = "metadata";

// recognized(but optional) metadata keys

pub const CROSS_COMPILE_KEY: &str = "cross_compile";
pub const COMPILER_VERSION_KEY: &str = "compiler_version";
pub const GIT_URL_KEY: &str = "git_url";
pub const GIT_BRANCH_KEY: &str = "git_branch";
pub const GIT_DESCRIBE_KEY: &str = "git_describe";
pub const GIT_COMMIT_KEY: &str = "git_commit";
