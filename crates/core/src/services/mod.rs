pub mod summary_service;
