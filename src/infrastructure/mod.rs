pub mod bootstrap;
pub mod csv;
pub mod db;
pub mod storage;
