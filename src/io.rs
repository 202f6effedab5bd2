pub mod dtos;
pub mod resource;
