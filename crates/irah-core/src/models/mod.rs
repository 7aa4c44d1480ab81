pub mod observation;
pub mod record;
pub mod score;
