pub mod uzbek;
