pub mod email;
pub mod ferry;
pub mod matcher;
pub mod pdf;
