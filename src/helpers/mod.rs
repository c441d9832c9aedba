pub mod normalize;
pub mod session_store;
