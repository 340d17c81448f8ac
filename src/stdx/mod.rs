pub(crate) mod http;
pub(crate) mod math;
pub(crate) mod serde;
