pub mod field;
pub mod observation_frame;
pub mod record;
pub mod station;
