pub mod application {
    pub mod auth {
        pub mod login;
        pub mod logout;
        pub mod require_session;
    }
    pub mod catalog {
        pub mod cached_gateway;
    }
    pub mod listing {
        pub mod controller;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_slug;
        pub mod get_categories;
        pub mod list;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod navigation;
    pub mod auth {
        pub mod errors;
        pub mod gateway;
        pub mod value_objects;
        pub mod use_cases {
            pub mod login;
            pub mod logout;
            pub mod require_session;
        }
    }
    pub mod listing {
        pub mod query;
        pub mod state;
    }
    pub mod product {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_slug;
            pub mod get_categories;
            pub mod list;
            pub mod update;
        }
    }
    pub mod session {
        pub mod model;
        pub mod storage;
        pub mod store;
    }
}
