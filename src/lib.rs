//! Generative-AI field shortcuts for low-code table apps: a text and an
//! image generation pipeline over a remote HTTP backend.

pub mod client;
pub mod config;
pub mod error;
pub mod field;
pub mod logger;
pub mod models;

pub use client::{GenClient, ImageClient, TextClient};
pub use config::BackendConfig;
pub use error::{FieldGenError, Result};
pub use field::{
    AttachmentDescriptor, FieldContext, FieldData, FieldHandler, FieldOutput, ImageField,
    TextField,
};
