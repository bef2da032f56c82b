//! Registry implementations for fetching gem versions

pub mod rubygems;

pub use rubygems::RubyGemsRegistry;
