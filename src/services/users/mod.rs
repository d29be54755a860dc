pub mod user_crud_service;
