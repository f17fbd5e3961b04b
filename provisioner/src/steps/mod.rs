mod deploy_bridge;
mod deploy_token;
mod read_input;
mod setup_roles;
mod write_output;

pub use deploy_bridge::deploy_bridge;
pub use deploy_token::deploy_token;
pub use read_input::read_setup_inputs;
pub use setup_roles::setup_roles;
pub use write_output::write_setup_artifacts;
