pub mod application {
    pub mod message {
        pub mod generate;
    }
    pub mod style {
        pub mod analyze;
    }
    pub mod suggestion {
        pub mod suggest;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod filter;
        pub mod matcher;
        pub mod model;
        pub mod repository;
    }
    pub mod message {
        pub mod fallback;
        pub mod model;
        pub mod parser;
        pub mod prompt;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod provider {
        pub mod errors;
        pub mod fallback;
        pub mod services;
    }
    pub mod style {
        pub mod errors;
        pub mod fallback;
        pub mod image;
        pub mod model;
        pub mod prompt;
        pub mod use_cases {
            pub mod analyze;
        }
    }
    pub mod suggestion {
        pub mod errors;
        pub mod fallback;
        pub mod keywords;
        pub mod model;
        pub mod prompt;
        pub mod use_cases {
            pub mod suggest;
        }
    }
}
