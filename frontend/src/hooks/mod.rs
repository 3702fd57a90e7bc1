pub mod use_transient_flag;

pub use use_transient_flag::use_transient_flag;
