pub mod render;
pub mod scanner;
#[cfg(test)]
pub mod testing;
pub mod youtube_api;
