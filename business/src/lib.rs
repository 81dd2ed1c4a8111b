pub mod application {
    pub mod cart {
        pub mod collection;
    }
    pub mod events {
        pub mod dispatcher;
        pub mod handlers;
    }
    pub mod pricing {
        pub mod summarize;
    }
    pub mod wishlist {
        pub mod collection;
    }
}

pub mod domain {
    pub mod display;
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod model;
        pub mod repository;
    }
    pub mod events {
        pub mod errors;
        pub mod model;
        pub mod source;
    }
    pub mod pricing {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod summarize;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod wishlist {
        pub mod model;
        pub mod repository;
    }
}
