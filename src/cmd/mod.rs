pub mod check;
pub mod commit;
pub mod config;
pub mod issue;
pub mod issue_types;
pub mod report;
pub mod seed;
