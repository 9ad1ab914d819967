mod client;
mod command;

pub use {
    client::{Appliance, ApplianceClient, ApplianceSettings},
    command::ApplianceCommand,
};
