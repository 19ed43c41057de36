pub mod commit;
pub mod issue_type;
pub mod reference;
pub mod report;
pub mod roadmap;
pub mod ticket;
