pub mod db;
pub mod catalog {
    pub mod entity;
    pub mod query;
    pub mod repository;
}
