mod device_status;
mod parser;

pub use {
    device_status::{DeviceStatus, RecordState},
    parser::parse_status,
};
