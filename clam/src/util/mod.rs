pub mod duration_format;
