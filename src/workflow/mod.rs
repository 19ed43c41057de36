pub mod commit;
pub mod connection;
pub mod discovery;
pub mod issue;
pub mod report;
pub mod seed;
pub mod transition;

#[cfg(test)]
pub(crate) mod fakes;
