pub mod convert;
pub mod detect;
pub mod doctor;
pub mod input;
pub mod patterns;
