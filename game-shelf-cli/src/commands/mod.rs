pub(crate) mod browse;
pub(crate) mod fetch;
pub(crate) mod list;
pub(crate) mod platforms;
pub(crate) mod resolve;
