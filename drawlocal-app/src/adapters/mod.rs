//! Preference storage adapters for desktop and CLI hosts.

mod json_file_store;

pub use json_file_store::JsonFilePreferenceStore;
