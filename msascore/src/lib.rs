pub mod compare;
pub mod score;
