pub(crate) mod config;
pub(crate) mod detect;
pub(crate) mod identify;
pub(crate) mod list;
pub(crate) mod playlist;
