pub mod stub_service;
pub mod test_server;
