pub mod bookstore;
pub mod controller;
pub mod domain;
pub mod pagination;
pub mod repository;
