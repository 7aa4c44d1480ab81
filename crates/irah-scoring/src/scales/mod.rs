pub mod asg;
pub mod charlson;
pub mod fugulin;
pub mod mrc;
pub mod triagem;
