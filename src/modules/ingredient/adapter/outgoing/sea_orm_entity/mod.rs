pub mod ingredients;
