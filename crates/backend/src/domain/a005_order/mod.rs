pub mod builder;
pub mod draft_tracker;
pub mod repository;
pub mod service;
