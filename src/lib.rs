pub mod modules {
    pub mod sensor_data {
        pub mod core {
            pub mod reading;
            pub mod timestamp;
        }
        pub mod use_cases {
            pub mod list_readings_by_range {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod readings_in_memory;
                pub mod readings_sqlite;
            }
        }
    }
}

pub mod shell;
