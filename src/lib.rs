pub mod auth;
pub mod config;
pub mod db;
pub mod engine;
pub mod entities;
pub mod error;
pub mod gateway;
pub mod geo;
pub mod pricing;
pub mod repository;
pub mod server;
pub mod usecase;
