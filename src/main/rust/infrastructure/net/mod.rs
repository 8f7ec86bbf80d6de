mod local_ip;

pub use local_ip::local_address;
