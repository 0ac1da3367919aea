pub mod config;
pub mod ls;
pub mod ps;
pub mod status;
pub mod submit;
pub mod top;

#[cfg(test)]
pub(crate) mod testing;
