pub(crate) mod settings;
pub(crate) mod show;
pub(crate) mod types;
