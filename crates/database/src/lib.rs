pub mod admin;
pub mod db;
pub mod entities;
pub mod services;
