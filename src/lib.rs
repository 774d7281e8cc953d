pub mod debounce;
pub mod domain;
pub mod errors;
pub mod pipeline;
pub mod reveal;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;
