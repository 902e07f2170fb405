pub mod cached_state;
pub mod serializer;

#[cfg(test)]
mod cached_state_test;
