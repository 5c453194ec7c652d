pub mod vehicle_routes;
