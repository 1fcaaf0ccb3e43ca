pub mod config;
pub mod epg;
pub mod errors;
pub mod models;
pub mod pvr;
pub mod render;
pub mod web;
