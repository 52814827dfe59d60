pub mod camp;
pub mod patient;
pub mod record;
