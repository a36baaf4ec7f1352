pub mod personal_repository;
#[cfg(test)]
pub mod memory_repository;
