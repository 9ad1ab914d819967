mod controller;
mod status;
