pub mod vehicle_loader;
