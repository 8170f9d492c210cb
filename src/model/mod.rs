pub mod attendance;
pub mod intern;
