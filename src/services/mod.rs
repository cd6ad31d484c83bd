// Service module exports

pub mod packer;
pub mod settings;
