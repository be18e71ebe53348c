pub mod application;
pub mod domain;
pub mod entity;
pub mod infrastructure;

#[cfg(test)]
mod test_support;
