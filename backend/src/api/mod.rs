pub mod scan;
pub mod settings;
