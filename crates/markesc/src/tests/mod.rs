mod escape_good;
pub(crate) mod utils;
