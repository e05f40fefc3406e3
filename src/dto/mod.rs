pub mod favorites;
