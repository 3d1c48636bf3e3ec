pub mod install;
pub mod materialize;
pub mod resolve;
pub mod scaffold;
