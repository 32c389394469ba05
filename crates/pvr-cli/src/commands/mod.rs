pub mod compare;
pub mod dashboard;
pub mod draft;
pub mod export;
pub mod filters;
pub mod mock;
pub mod next_version;
pub mod options;
pub mod prompts;
pub mod schemas;
