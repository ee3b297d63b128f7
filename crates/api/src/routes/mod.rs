pub mod health;
pub mod pages;
pub mod project;
pub mod task;
