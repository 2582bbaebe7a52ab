pub mod provisioner;

pub use provisioner::{provision, KeyProvisioner, ProvisionReport};
